//! Loading machine (excavator, backhoe, shovel)

use serde::{Deserialize, Serialize};

/// Loading machine specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSpec {
    /// Display name, also the catalog key
    pub name: String,
    /// Bucket capacity in m³
    pub bucket_capacity_m3: f64,
    /// One dig-swing-dump-return cycle in seconds
    pub cycle_time_s: f64,
    /// Operator/mechanical efficiency (0.0 - 1.0]
    pub efficiency: f64,
    /// Classification only (Backhoe, Shovel, ...)
    pub product_type: String,
}

impl LoaderSpec {
    pub const DEFAULT_CYCLE_TIME_S: f64 = 25.0;
    pub const DEFAULT_EFFICIENCY: f64 = 0.92;
    pub const DEFAULT_PRODUCT_TYPE: &'static str = "Backhoe";

    pub fn new(name: impl Into<String>, bucket_capacity_m3: f64) -> Self {
        Self {
            name: name.into(),
            bucket_capacity_m3,
            cycle_time_s: Self::DEFAULT_CYCLE_TIME_S,
            efficiency: Self::DEFAULT_EFFICIENCY,
            product_type: Self::DEFAULT_PRODUCT_TYPE.to_string(),
        }
    }

    pub fn with_cycle_time(mut self, cycle_time_s: f64) -> Self {
        self.cycle_time_s = cycle_time_s;
        self
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }
}
