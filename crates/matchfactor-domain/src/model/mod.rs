//! Domain model types

pub mod catalog;
pub mod hauler;
pub mod loader;
pub mod material;
pub mod params;
pub mod result;

pub use catalog::EquipmentCatalog;
pub use hauler::HaulerSpec;
pub use loader::LoaderSpec;
pub use material::MaterialSpec;
pub use params::OperatingParameters;
pub use result::{CalculationResult, EfficiencyStatus};

/// Resolve an optional catalog value, treating absent and NaN alike
pub fn value_or_default(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => default,
    }
}
