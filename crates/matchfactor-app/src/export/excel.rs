//! Excel export functionality

use std::path::Path;

use matchfactor_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::app::SweepReport;

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a sweep report to an Excel workbook
pub fn export_to_excel(report: &SweepReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let points_sheet = workbook.add_worksheet();
    write_points_sheet(points_sheet, report)?;

    workbook.save(output_path).map_err(xlsx_err)?;

    tracing::info!(path = %output_path.display(), rows = report.points.len(), "workbook written");
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &SweepReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Fleet Match Factor Sweep", &header_format)
        .map_err(xlsx_err)?;

    let text_rows = [
        ("Generated:", report.generated_at.to_rfc3339()),
        ("Loader:", report.loader.clone()),
        ("Hauler:", report.hauler.clone()),
        ("Material:", report.material.clone()),
        ("Job Condition:", report.params.job_condition.label().to_string()),
        ("Swept Input:", report.axis.label().to_string()),
    ];
    let mut row = 2;
    for (label, value) in &text_rows {
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_string(row, 1, value).map_err(xlsx_err)?;
        row += 1;
    }

    let number_rows = [
        ("Haul Distance (km):", report.params.haul_distance_km),
        ("Trucks:", f64::from(report.params.num_trucks)),
        ("Reposition (s):", report.params.reposition_time_s),
        ("Speed Loaded (km/h):", report.speed_loaded_kmh),
        ("Speed Empty (km/h):", report.speed_empty_kmh),
        ("Points:", report.points.len() as f64),
    ];
    for (label, value) in &number_rows {
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_number(row, 1, *value).map_err(xlsx_err)?;
        row += 1;
    }

    if let Some(best) = report.closest_to_match() {
        row += 1;
        sheet
            .write_string_with_format(row, 0, "Closest to MF 1.0", &header_format)
            .map_err(xlsx_err)?;
        sheet.write_string(row + 1, 0, "Trucks:").map_err(xlsx_err)?;
        sheet
            .write_number(row + 1, 1, f64::from(best.num_trucks))
            .map_err(xlsx_err)?;
        sheet.write_string(row + 2, 0, "Distance (km):").map_err(xlsx_err)?;
        sheet
            .write_number(row + 2, 1, best.haul_distance_km)
            .map_err(xlsx_err)?;
        sheet.write_string(row + 3, 0, "Match Factor:").map_err(xlsx_err)?;
        sheet
            .write_number(row + 3, 1, best.match_factor)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 22).map_err(xlsx_err)?;
    sheet.set_column_width(1, 28).map_err(xlsx_err)?;

    Ok(())
}

fn write_points_sheet(sheet: &mut Worksheet, report: &SweepReport) -> Result<()> {
    sheet.set_name("Points").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Trucks",
        "Distance (km)",
        "Match Factor",
        "Status",
        "Fleet (BCM/h)",
        "Fleet (t/h)",
        "Per Truck (BCM/h)",
        "Per Truck (t/h)",
        "Loader Limited",
        "MF Difference",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, point) in report.points.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_number(row, 0, f64::from(point.num_trucks))
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 1, point.haul_distance_km)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 2, point.match_factor)
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 3, point.status.label())
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 4, point.fleet_bcm_per_hour)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 5, point.fleet_tons_per_hour)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 6, point.unit_bcm_per_hour)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 7, point.unit_tons_per_hour)
            .map_err(xlsx_err)?;
        sheet
            .write_boolean(row, 8, point.loader_limited)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 9, point.mf_deviation())
            .map_err(xlsx_err)?;
    }

    for col in 0..headers.len() as u16 {
        sheet.set_column_width(col, 16).map_err(xlsx_err)?;
    }

    Ok(())
}
