//! Command handlers

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, ScenarioArgs, SweepCommand};
use crate::output::{output_analysis, output_catalog, output_recommendation, output_sweep};
use matchfactor_app::export::export_sweep;
use matchfactor_app::{Config, EquipmentSelection, FleetAnalyzer, SweepReport};
use matchfactor_domain::service::DistanceRange;
use matchfactor_domain::{CatalogSource, DomainError, EquipmentCatalog, OperatingParameters};
use matchfactor_infra::TomlCatalogFile;
use matchfactor_types::{JobCondition, OutputFormat, Result};
use tracing::{debug, info};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(format = %output_format, "config loaded");

    match &cli.command {
        Commands::Calc { scenario } => cmd_calc(&cli, &config, scenario, output_format),

        Commands::Optimal { scenario } => cmd_optimal(&cli, &config, scenario, output_format),

        Commands::Sweep { axis } => match axis {
            SweepCommand::Trucks {
                scenario,
                from,
                to,
                output,
            } => {
                DomainError::require_non_negative("to - from", f64::from(*to) - f64::from(*from))?;
                let catalog = load_catalog(&cli, &config)?;
                let report = FleetAnalyzer::new(&catalog).sweep_trucks(
                    &selection(scenario, &config),
                    &scenario_params(scenario, &config),
                    *from..=*to,
                )?;
                finish_sweep(&report, output.as_deref(), output_format)
            }
            SweepCommand::Distance {
                scenario,
                start,
                end,
                step,
                output,
            } => {
                let range = DistanceRange::new(*start, *end, *step)?;
                let catalog = load_catalog(&cli, &config)?;
                let report = FleetAnalyzer::new(&catalog).sweep_distance(
                    &selection(scenario, &config),
                    &scenario_params(scenario, &config),
                    range,
                )?;
                finish_sweep(&report, output.as_deref(), output_format)
            }
        },

        Commands::Catalog {
            loaders,
            haulers,
            materials,
        } => {
            let catalog = load_catalog(&cli, &config)?;
            // No filter flag means everything
            let all = !(*loaders || *haulers || *materials);
            output_catalog(
                output_format,
                &catalog,
                all || *loaders,
                all || *haulers,
                all || *materials,
            )
        }

        Commands::Config {
            show,
            set_catalog,
            clear_catalog,
            set_job,
            set_distance,
            set_trucks,
            set_reposition,
            set_speed_loaded,
            set_speed_empty,
            clear_speeds,
            set_output,
            reset,
        } => cmd_config(
            config,
            ConfigUpdate {
                show: *show,
                set_catalog: set_catalog.clone(),
                clear_catalog: *clear_catalog,
                set_job: *set_job,
                set_distance: *set_distance,
                set_trucks: *set_trucks,
                set_reposition: *set_reposition,
                set_speed_loaded: *set_speed_loaded,
                set_speed_empty: *set_speed_empty,
                clear_speeds: *clear_speeds,
                set_output: *set_output,
                reset: *reset,
            },
        ),
    }
}

/// Catalog from `--catalog`, else from config
fn load_catalog(cli: &Cli, config: &Config) -> Result<EquipmentCatalog> {
    let source: Box<dyn CatalogSource> = match &cli.catalog {
        Some(path) => Box::new(TomlCatalogFile::new(path)),
        None => config.catalog_source(),
    };
    info!(source = %source.describe(), "loading catalog");
    Ok(source.load_catalog()?)
}

/// Equipment names plus speeds, command line over config
fn selection(args: &ScenarioArgs, config: &Config) -> EquipmentSelection {
    EquipmentSelection::new(&args.loader, &args.hauler, &args.material).with_speeds(
        args.speed_loaded.or(config.speed_loaded_kmh),
        args.speed_empty.or(config.speed_empty_kmh),
    )
}

/// Operating inputs, command line over config
fn scenario_params(args: &ScenarioArgs, config: &Config) -> OperatingParameters {
    let defaults = config.operating_parameters();
    OperatingParameters {
        job_condition: args.job.unwrap_or(defaults.job_condition),
        haul_distance_km: args.distance.unwrap_or(defaults.haul_distance_km),
        num_trucks: args.trucks.unwrap_or(defaults.num_trucks),
        reposition_time_s: args.reposition.unwrap_or(defaults.reposition_time_s),
    }
}

fn cmd_calc(
    cli: &Cli,
    config: &Config,
    scenario: &ScenarioArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let analysis = FleetAnalyzer::new(&catalog)
        .analyze(&selection(scenario, config), &scenario_params(scenario, config))?;
    output_analysis(output_format, &analysis)
}

fn cmd_optimal(
    cli: &Cli,
    config: &Config,
    scenario: &ScenarioArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(cli, config)?;
    let recommendation = FleetAnalyzer::new(&catalog)
        .recommend(&selection(scenario, config), &scenario_params(scenario, config))?;
    output_recommendation(output_format, &recommendation)
}

fn finish_sweep(
    report: &SweepReport,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    match output {
        Some(path) => {
            export_sweep(report, path)?;
            println!("Exported {} points to {}", report.points.len(), path.display());
            Ok(())
        }
        None => output_sweep(output_format, report),
    }
}

struct ConfigUpdate {
    show: bool,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    set_job: Option<JobCondition>,
    set_distance: Option<f64>,
    set_trucks: Option<u32>,
    set_reposition: Option<f64>,
    set_speed_loaded: Option<f64>,
    set_speed_empty: Option<f64>,
    clear_speeds: bool,
    set_output: Option<OutputFormat>,
    reset: bool,
}

/// Apply requested changes; returns whether anything changed
fn apply_config_update(config: &mut Config, update: &ConfigUpdate) -> bool {
    let mut modified = false;

    if update.clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if let Some(path) = &update.set_catalog {
        config.catalog_path = Some(path.clone());
        modified = true;
    }

    if let Some(job) = update.set_job {
        config.job_condition = job;
        modified = true;
    }

    if let Some(distance) = update.set_distance {
        config.haul_distance_km = distance;
        modified = true;
    }

    if let Some(trucks) = update.set_trucks {
        config.num_trucks = trucks;
        modified = true;
    }

    if let Some(reposition) = update.set_reposition {
        config.reposition_time_s = reposition;
        modified = true;
    }

    if update.clear_speeds {
        config.speed_loaded_kmh = None;
        config.speed_empty_kmh = None;
        modified = true;
    }

    if let Some(speed) = update.set_speed_loaded {
        config.speed_loaded_kmh = Some(speed);
        modified = true;
    }

    if let Some(speed) = update.set_speed_empty {
        config.speed_empty_kmh = Some(speed);
        modified = true;
    }

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    modified
}

fn cmd_config(mut config: Config, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let modified = apply_config_update(&mut config, &update);
    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
