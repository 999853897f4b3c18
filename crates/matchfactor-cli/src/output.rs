//! Output formatting module

use matchfactor_app::{FleetAnalysis, SweepReport};
use matchfactor_domain::service::FleetRecommendation;
use matchfactor_domain::{CalculationResult, EquipmentCatalog, HaulerSpec, LoaderSpec, MaterialSpec};
use matchfactor_types::{OutputFormat, Result};

pub fn output_analysis(output_format: OutputFormat, analysis: &FleetAnalysis) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    let result = &analysis.result;
    let params = &analysis.params;

    println!("\nFleet Match");
    println!("===========");
    println!(
        "Loader:          {} ({} m³, {} s cycle)",
        analysis.loader.name, analysis.loader.bucket_capacity_m3, analysis.loader.cycle_time_s
    );
    println!(
        "Hauler:          {} ({} t, {}/{} km/h loaded/empty)",
        analysis.hauler.name,
        analysis.hauler.capacity_tons,
        analysis.hauler.speed_loaded_kmh,
        analysis.hauler.speed_empty_kmh
    );
    println!("Material:        {}", analysis.material.name);
    println!(
        "Job condition:   {} ({:.0}%)",
        params.job_condition,
        result.job_efficiency * 100.0
    );
    println!("Haul distance:   {} km", params.haul_distance_km);
    println!("Trucks:          {}", params.num_trucks);

    println!("\n--- Result ---");
    print_result(result);

    println!("\n--- Cycle Breakdown ---");
    for (label, minutes, pct) in analysis.breakdown.components() {
        println!("{:<20} {:>7.2} min {:>5.1}%", label, minutes, pct);
    }
    println!(
        "{:<20} {:>7.2} min  ({:.2} trips/h)",
        "Total", analysis.breakdown.total_minutes, analysis.breakdown.trips_per_hour
    );
    println!(
        "Reposition {:.2} min is included in loading",
        analysis.breakdown.reposition_minutes
    );

    println!();
    print_recommendation(&analysis.recommendation);

    Ok(())
}

fn print_result(result: &CalculationResult) {
    println!(
        "Match factor:    {:.3} ({})",
        result.match_factor, result.status
    );
    println!("Bucket passes:   {}", result.bucket_passes);
    println!(
        "Fleet:           {:.1} BCM/h, {:.1} t/h{}",
        result.fleet_bcm_per_hour,
        result.fleet_tons_per_hour,
        if result.loader_limited {
            " (loader limited)"
        } else {
            ""
        }
    );
    println!(
        "Per truck:       {:.1} BCM/h, {:.1} t/h",
        result.unit_bcm_per_hour, result.unit_tons_per_hour
    );
    println!(
        "Loader max:      {:.1} BCM/h",
        result.loader_max_bcm_per_hour
    );
}

fn print_recommendation(recommendation: &FleetRecommendation) {
    println!("--- Optimal Fleet ---");
    println!("Exact trucks:    {:.2}", recommendation.exact_trucks);
    println!("Recommended:     {}", recommendation.recommended_trucks);
    println!(
        "Achieved MF:     {:.3} ({})",
        recommendation.achieved.match_factor, recommendation.achieved.status
    );
    println!(
        "Fleet:           {:.1} BCM/h, {:.1} t/h",
        recommendation.achieved.fleet_bcm_per_hour, recommendation.achieved.fleet_tons_per_hour
    );
}

pub fn output_recommendation(
    output_format: OutputFormat,
    recommendation: &FleetRecommendation,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
    } else {
        println!();
        print_recommendation(recommendation);
    }
    Ok(())
}

pub fn output_sweep(output_format: OutputFormat, report: &SweepReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "\nSweep over {}: {} / {} / {}",
        report.axis.label(),
        report.loader,
        report.hauler,
        report.material
    );
    println!(
        "{:>6} {:>8} {:>8} {:>12} {:>10} {:>12} {:>12}",
        "Trucks", "Dist km", "MF", "Status", "Fleet BCM", "Fleet t", "Truck BCM"
    );
    for point in &report.points {
        println!(
            "{:>6} {:>8.1} {:>8.3} {:>12} {:>10.1} {:>12.1} {:>12.1}",
            point.num_trucks,
            point.haul_distance_km,
            point.match_factor,
            point.status.label(),
            point.fleet_bcm_per_hour,
            point.fleet_tons_per_hour,
            point.unit_bcm_per_hour
        );
    }

    if let Some(best) = report.closest_to_match() {
        println!(
            "\nClosest to MF 1.0: {} trucks at {} km (MF {:.3})",
            best.num_trucks, best.haul_distance_km, best.match_factor
        );
    }

    Ok(())
}

pub fn output_catalog(
    output_format: OutputFormat,
    catalog: &EquipmentCatalog,
    loaders: bool,
    haulers: bool,
    materials: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let mut listing = serde_json::Map::new();
        if loaders {
            let entries: Vec<&LoaderSpec> = catalog.loaders().collect();
            listing.insert("loaders".to_string(), serde_json::to_value(entries)?);
        }
        if haulers {
            let entries: Vec<&HaulerSpec> = catalog.haulers().collect();
            listing.insert("haulers".to_string(), serde_json::to_value(entries)?);
        }
        if materials {
            let entries: Vec<&MaterialSpec> = catalog.materials().collect();
            listing.insert("materials".to_string(), serde_json::to_value(entries)?);
        }
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if loaders {
        println!("\nLoaders");
        println!("=======");
        println!(
            "{:<16} {:>10} {:>10} {:>6}  {}",
            "Name", "Bucket m³", "Cycle s", "Eff", "Type"
        );
        for l in catalog.loaders() {
            println!(
                "{:<16} {:>10.2} {:>10.1} {:>6.2}  {}",
                l.name, l.bucket_capacity_m3, l.cycle_time_s, l.efficiency, l.product_type
            );
        }
    }

    if haulers {
        println!("\nHaulers");
        println!("=======");
        println!(
            "{:<16} {:>10} {:>10} {:>10} {:>6}  {}",
            "Name", "Payload t", "Loaded", "Empty", "Eff", "Type"
        );
        for h in catalog.haulers() {
            println!(
                "{:<16} {:>10.1} {:>10.1} {:>10.1} {:>6.2}  {}",
                h.name,
                h.capacity_tons,
                h.speed_loaded_kmh,
                h.speed_empty_kmh,
                h.efficiency,
                h.product_type
            );
        }
    }

    if materials {
        println!("\nMaterials");
        println!("=========");
        println!(
            "{:<16} {:>8} {:>8} {:>8} {:>8}",
            "Name", "Bank", "Loose", "Swell", "Fill"
        );
        for m in catalog.materials() {
            println!(
                "{:<16} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                m.name,
                m.density_bank_t_per_m3,
                m.density_loose_t_per_m3,
                m.swell_factor,
                m.fill_factor
            );
        }
    }

    Ok(())
}
