//! Sweep export to CSV and Excel

use matchfactor_app::export::export_sweep;
use matchfactor_app::{EquipmentSelection, FleetAnalyzer, SweepReport};
use matchfactor_domain::service::{DistanceRange, DEFAULT_TRUCK_RANGE};
use matchfactor_domain::{
    EquipmentCatalog, HaulerSpec, LoaderSpec, MaterialSpec, OperatingParameters,
};
use matchfactor_types::Error;
use tempfile::tempdir;

fn catalog() -> EquipmentCatalog {
    EquipmentCatalog::new(
        vec![LoaderSpec::new("PC850", 3.5)
            .with_cycle_time(25.0)
            .with_efficiency(0.92)],
        vec![HaulerSpec::new("HD465", 60.0)],
        vec![MaterialSpec::with_defaults("Overburden")],
    )
}

fn truck_report() -> SweepReport {
    let catalog = catalog();
    let selection = EquipmentSelection::new("PC850", "HD465", "Overburden")
        .with_speeds(Some(20.0), Some(30.0));
    FleetAnalyzer::new(&catalog)
        .sweep_trucks(&selection, &OperatingParameters::default(), DEFAULT_TRUCK_RANGE)
        .unwrap()
}

#[test]
fn test_csv_columns_and_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sweep.csv");
    export_sweep(&truck_report(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        [
            "Loader",
            "Hauler",
            "Material",
            "Haul_Distance_km",
            "Job_Condition",
            "Num_Trucks",
            "Match_Factor",
            "Total_Fleet_Productivity_BCM",
            "Total_Fleet_Productivity_Tons",
            "Per_Truck_Productivity_BCM",
            "Per_Truck_Productivity_Tons",
            "Efficiency_Status",
            "MF_Difference_from_Optimal",
        ]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 20);

    let fifth = &records[4];
    assert_eq!(&fifth[0], "PC850");
    assert_eq!(&fifth[4], "Average");
    assert_eq!(&fifth[5], "5");
    let mf: f64 = fifth[6].parse().unwrap();
    assert!((mf - 1.2659029052471675).abs() < 1e-9);
    assert_eq!(&fifth[11], "Over-truck");
    let deviation: f64 = fifth[12].parse().unwrap();
    assert!((deviation - (mf - 1.0)).abs() < 1e-9);
}

#[test]
fn test_csv_distance_sweep() {
    let catalog = catalog();
    let selection = EquipmentSelection::new("PC850", "HD465", "Overburden");
    let report = FleetAnalyzer::new(&catalog)
        .sweep_distance(
            &selection,
            &OperatingParameters::default(),
            DistanceRange::default(),
        )
        .unwrap();

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("distance.CSV");
    export_sweep(&report, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let distances: Vec<f64> = reader
        .records()
        .map(|r| r.unwrap()[3].parse().unwrap())
        .collect();
    assert_eq!(distances.len(), 30);
    assert_eq!(distances[0], 0.5);
    assert_eq!(distances[29], 15.0);
}

#[test]
fn test_excel_written() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sweep.xlsx");
    export_sweep(&truck_report(), &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sweep.pdf");
    let err = export_sweep(&truck_report(), &path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedExport(_)));
    assert!(!path.exists());

    let no_ext = dir.path().join("sweep");
    assert!(matches!(
        export_sweep(&truck_report(), &no_ext),
        Err(Error::UnsupportedExport(_))
    ));
}
