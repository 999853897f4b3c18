//! Application layer for matchfactor
//!
//! Resolves catalog names into equipment, applies per-request overrides,
//! runs the engine and shapes its output for display and export.

pub mod app;
pub mod config;
pub mod export;
pub mod logging;

pub use app::{EquipmentSelection, FleetAnalysis, FleetAnalyzer, SweepReport};
pub use config::Config;
