//! Application services

pub mod analysis_service;

pub use analysis_service::{EquipmentSelection, FleetAnalysis, FleetAnalyzer, SweepReport};
