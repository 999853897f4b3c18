//! Per-request operating parameters

use matchfactor_types::JobCondition;
use serde::{Deserialize, Serialize};

/// Inputs chosen per calculation, independent of the equipment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    pub job_condition: JobCondition,
    /// One-way haul distance in km
    pub haul_distance_km: f64,
    /// Trucks assigned to the loader
    pub num_trucks: u32,
    /// Loader repositioning between truck spots, in seconds
    pub reposition_time_s: f64,
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self {
            job_condition: JobCondition::Average,
            haul_distance_km: 3.0,
            num_trucks: 5,
            reposition_time_s: 20.0,
        }
    }
}

impl OperatingParameters {
    pub fn with_trucks(self, num_trucks: u32) -> Self {
        Self { num_trucks, ..self }
    }

    pub fn with_distance(self, haul_distance_km: f64) -> Self {
        Self {
            haul_distance_km,
            ..self
        }
    }

    pub fn with_job_condition(self, job_condition: JobCondition) -> Self {
        Self {
            job_condition,
            ..self
        }
    }

    pub fn with_reposition(self, reposition_time_s: f64) -> Self {
        Self {
            reposition_time_s,
            ..self
        }
    }

    pub fn job_efficiency(&self) -> f64 {
        self.job_condition.efficiency()
    }
}
