//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use matchfactor_types::{JobCondition, OutputFormat};
use std::path::PathBuf;

/// Accepted truck speed range in km/h
pub const SPEED_RANGE_KMH: (f64, f64) = (10.0, 60.0);

#[derive(Parser)]
#[command(name = "matchfactor")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Loader and truck fleet matching for open-pit mining")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Equipment catalog (TOML). Uses config value or the built-in catalog if not specified.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Equipment and operating inputs shared by the calculation commands
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Loader name from the catalog (e.g., "PC850")
    #[arg(long, short = 'l')]
    pub loader: String,

    /// Hauler name from the catalog (e.g., "HD465")
    #[arg(long, short = 't')]
    pub hauler: String,

    /// Material name from the catalog (e.g., "Overburden")
    #[arg(long, short = 'm')]
    pub material: String,

    /// One-way haul distance in km
    #[arg(long, short = 'd')]
    pub distance: Option<f64>,

    /// Number of trucks
    #[arg(long, short = 'n')]
    pub trucks: Option<u32>,

    /// Job condition
    #[arg(long, short = 'j')]
    pub job: Option<JobCondition>,

    /// Loader reposition time per truck in seconds
    #[arg(long)]
    pub reposition: Option<f64>,

    /// Loaded truck speed in km/h (10-60)
    #[arg(long, value_parser = parse_speed)]
    pub speed_loaded: Option<f64>,

    /// Empty truck speed in km/h (10-60)
    #[arg(long, value_parser = parse_speed)]
    pub speed_empty: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match factor, productivity and cycle breakdown for one scenario
    Calc {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Number of trucks for a match factor of 1.0
    Optimal {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Sensitivity sweep over truck count or haul distance
    Sweep {
        #[command(subcommand)]
        axis: SweepCommand,
    },

    /// List catalog entries
    Catalog {
        /// Show loaders only
        #[arg(long)]
        loaders: bool,

        /// Show haulers only
        #[arg(long)]
        haulers: bool,

        /// Show materials only
        #[arg(long)]
        materials: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set equipment catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Use the built-in catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Set default job condition
        #[arg(long)]
        set_job: Option<JobCondition>,

        /// Set default haul distance (km)
        #[arg(long)]
        set_distance: Option<f64>,

        /// Set default number of trucks
        #[arg(long)]
        set_trucks: Option<u32>,

        /// Set default reposition time (s)
        #[arg(long)]
        set_reposition: Option<f64>,

        /// Set default loaded speed (km/h)
        #[arg(long, value_parser = parse_speed)]
        set_speed_loaded: Option<f64>,

        /// Set default empty speed (km/h)
        #[arg(long, value_parser = parse_speed)]
        set_speed_empty: Option<f64>,

        /// Use each hauler's catalog speeds
        #[arg(long)]
        clear_speeds: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum SweepCommand {
    /// Vary the number of trucks
    Trucks {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// First truck count
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        from: u32,

        /// Last truck count
        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
        to: u32,

        /// Output file (.csv or .xlsx)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Vary the haul distance
    Distance {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// First distance (km)
        #[arg(long, default_value = "0.5")]
        start: f64,

        /// Last distance (km)
        #[arg(long, default_value = "15.0")]
        end: f64,

        /// Distance step (km)
        #[arg(long, default_value = "0.5")]
        step: f64,

        /// Output file (.csv or .xlsx)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    let (min, max) = SPEED_RANGE_KMH;
    if (min..=max).contains(&speed) {
        Ok(speed)
    } else {
        Err(format!("speed must be between {} and {} km/h", min, max))
    }
}
