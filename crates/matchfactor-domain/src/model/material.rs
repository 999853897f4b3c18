//! Hauled material properties

use serde::{Deserialize, Serialize};

/// Material properties
///
/// `density_loose_t_per_m3 <= density_bank_t_per_m3` is typical but catalog
/// data is not required to respect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name, also the catalog key
    pub name: String,
    /// In-situ density in t/m³
    pub density_bank_t_per_m3: f64,
    /// Loose (loaded) density in t/m³
    pub density_loose_t_per_m3: f64,
    /// Loose/bank volume ratio (0.0 - 1.0]
    pub swell_factor: f64,
    /// Bucket fill efficiency (0.0 - 1.0]
    pub fill_factor: f64,
}

impl MaterialSpec {
    pub const DEFAULT_DENSITY_BANK: f64 = 2.0;
    pub const DEFAULT_DENSITY_LOOSE: f64 = 1.5;
    pub const DEFAULT_SWELL_FACTOR: f64 = 0.8;
    pub const DEFAULT_FILL_FACTOR: f64 = 0.9;

    /// A material carrying every default value
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            density_bank_t_per_m3: Self::DEFAULT_DENSITY_BANK,
            density_loose_t_per_m3: Self::DEFAULT_DENSITY_LOOSE,
            swell_factor: Self::DEFAULT_SWELL_FACTOR,
            fill_factor: Self::DEFAULT_FILL_FACTOR,
        }
    }

    /// Convert a mass rate (t/h) to bank volume (BCM/h)
    pub fn tons_to_bcm(&self, tons: f64) -> f64 {
        tons / self.density_bank_t_per_m3
    }

    /// Convert bank volume (BCM/h) to a mass rate (t/h)
    pub fn bcm_to_tons(&self, bcm: f64) -> f64 {
        bcm * self.density_bank_t_per_m3
    }
}
