//! Hauling vehicle (rigid or articulated dump truck)

use serde::{Deserialize, Serialize};

/// Hauling vehicle specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaulerSpec {
    /// Display name, also the catalog key
    pub name: String,
    /// Rated payload in metric tonnes
    pub capacity_tons: f64,
    /// Travel speed when loaded in km/h
    pub speed_loaded_kmh: f64,
    /// Travel speed when empty in km/h
    pub speed_empty_kmh: f64,
    /// Operator efficiency (0.0 - 1.0]
    pub efficiency: f64,
    /// Classification only (Dump Truck, Truck Art, ...)
    pub product_type: String,
}

impl HaulerSpec {
    pub const DEFAULT_EFFICIENCY: f64 = 0.92;
    pub const DEFAULT_SPEED_LOADED_KMH: f64 = 23.0;
    pub const DEFAULT_SPEED_EMPTY_KMH: f64 = 21.0;
    pub const DEFAULT_PRODUCT_TYPE: &'static str = "Dump Truck";

    pub fn new(name: impl Into<String>, capacity_tons: f64) -> Self {
        Self {
            name: name.into(),
            capacity_tons,
            speed_loaded_kmh: Self::DEFAULT_SPEED_LOADED_KMH,
            speed_empty_kmh: Self::DEFAULT_SPEED_EMPTY_KMH,
            efficiency: Self::DEFAULT_EFFICIENCY,
            product_type: Self::DEFAULT_PRODUCT_TYPE.to_string(),
        }
    }

    /// A new hauler built from this one with the given travel speeds.
    ///
    /// Catalog entries are shared read-only; per-request speed choices
    /// always go through this copy.
    pub fn with_speeds(&self, speed_loaded_kmh: f64, speed_empty_kmh: f64) -> Self {
        Self {
            speed_loaded_kmh,
            speed_empty_kmh,
            ..self.clone()
        }
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
