//! Sweep report export

pub mod csv;
pub mod excel;

use std::path::Path;

use matchfactor_types::{Error, Result};

use crate::app::SweepReport;

pub use self::csv::{export_to_csv, CsvRow};
pub use self::excel::export_to_excel;

/// Write a report, choosing the format from the file extension
pub fn export_sweep(report: &SweepReport, output_path: &Path) -> Result<()> {
    let extension = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => export_to_csv(report, output_path),
        Some("xlsx") => export_to_excel(report, output_path),
        _ => Err(Error::UnsupportedExport(output_path.display().to_string())),
    }
}
