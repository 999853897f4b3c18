//! CSV export, one row per sweep point

use std::path::Path;

use matchfactor_types::Result;
use serde::Serialize;

use crate::app::SweepReport;

#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    #[serde(rename = "Loader")]
    pub loader: &'a str,
    #[serde(rename = "Hauler")]
    pub hauler: &'a str,
    #[serde(rename = "Material")]
    pub material: &'a str,
    #[serde(rename = "Haul_Distance_km")]
    pub haul_distance_km: f64,
    #[serde(rename = "Job_Condition")]
    pub job_condition: &'static str,
    #[serde(rename = "Num_Trucks")]
    pub num_trucks: u32,
    #[serde(rename = "Match_Factor")]
    pub match_factor: f64,
    #[serde(rename = "Total_Fleet_Productivity_BCM")]
    pub fleet_bcm_per_hour: f64,
    #[serde(rename = "Total_Fleet_Productivity_Tons")]
    pub fleet_tons_per_hour: f64,
    #[serde(rename = "Per_Truck_Productivity_BCM")]
    pub unit_bcm_per_hour: f64,
    #[serde(rename = "Per_Truck_Productivity_Tons")]
    pub unit_tons_per_hour: f64,
    #[serde(rename = "Efficiency_Status")]
    pub status: &'static str,
    #[serde(rename = "MF_Difference_from_Optimal")]
    pub mf_deviation: f64,
}

/// Rows in sweep order
pub fn rows(report: &SweepReport) -> impl Iterator<Item = CsvRow<'_>> {
    report.points.iter().map(move |point| CsvRow {
        loader: &report.loader,
        hauler: &report.hauler,
        material: &report.material,
        haul_distance_km: point.haul_distance_km,
        job_condition: report.params.job_condition.label(),
        num_trucks: point.num_trucks,
        match_factor: point.match_factor,
        fleet_bcm_per_hour: point.fleet_bcm_per_hour,
        fleet_tons_per_hour: point.fleet_tons_per_hour,
        unit_bcm_per_hour: point.unit_bcm_per_hour,
        unit_tons_per_hour: point.unit_tons_per_hour,
        status: point.status.label(),
        mf_deviation: point.mf_deviation(),
    })
}

pub fn export_to_csv(report: &SweepReport, output_path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(output_path)?;
    for row in rows(report) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %output_path.display(), rows = report.points.len(), "CSV written");
    Ok(())
}
