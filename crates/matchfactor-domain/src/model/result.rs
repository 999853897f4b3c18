//! Calculation output types

use serde::{Deserialize, Serialize};

/// Fleet sizing relative to the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EfficiencyStatus {
    /// Match factor below 1.0: the loader waits for trucks
    #[serde(rename = "Under-truck")]
    UnderTruck,
    /// Match factor in [1.0, 1.2]
    Optimal,
    /// Match factor above 1.2: trucks queue at the loader
    #[serde(rename = "Over-truck")]
    OverTruck,
}

impl EfficiencyStatus {
    pub const OPTIMAL_MIN: f64 = 1.0;
    pub const OPTIMAL_MAX: f64 = 1.2;

    /// Classify a match factor. Both bounds are inclusive, no tolerance.
    ///
    /// Expects a finite value, as returned by `match_factor`; NaN compares
    /// false against both bounds and would land in `OverTruck`.
    pub fn from_match_factor(match_factor: f64) -> Self {
        if (Self::OPTIMAL_MIN..=Self::OPTIMAL_MAX).contains(&match_factor) {
            EfficiencyStatus::Optimal
        } else if match_factor < Self::OPTIMAL_MIN {
            EfficiencyStatus::UnderTruck
        } else {
            EfficiencyStatus::OverTruck
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyStatus::UnderTruck => "Under-truck",
            EfficiencyStatus::Optimal => "Optimal",
            EfficiencyStatus::OverTruck => "Over-truck",
        }
    }
}

impl std::fmt::Display for EfficiencyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one match factor evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub num_trucks: u32,
    pub haul_distance_km: f64,
    pub match_factor: f64,
    pub status: EfficiencyStatus,
    /// Fleet productivity, capped by the loader (BCM/h)
    pub fleet_bcm_per_hour: f64,
    /// Fleet productivity, capped by the loader (t/h)
    pub fleet_tons_per_hour: f64,
    /// Single truck productivity (BCM/h)
    pub unit_bcm_per_hour: f64,
    /// Single truck productivity (t/h)
    pub unit_tons_per_hour: f64,
    /// Loader digging ceiling (BCM/h)
    pub loader_max_bcm_per_hour: f64,
    /// Whether the fleet total was clamped to the loader ceiling
    pub loader_limited: bool,
    pub bucket_passes: u32,
    /// Time the loader spends on one truck, in hours
    pub loading_cycle_hours: f64,
    /// Complete truck cycle, in hours
    pub total_cycle_hours: f64,
    pub job_efficiency: f64,
}

impl CalculationResult {
    /// Absolute distance from a perfect match
    pub fn mf_deviation(&self) -> f64 {
        (self.match_factor - 1.0).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(EfficiencyStatus::from_match_factor(0.999), EfficiencyStatus::UnderTruck);
        assert_eq!(EfficiencyStatus::from_match_factor(1.0), EfficiencyStatus::Optimal);
        assert_eq!(EfficiencyStatus::from_match_factor(1.1), EfficiencyStatus::Optimal);
        assert_eq!(EfficiencyStatus::from_match_factor(1.2), EfficiencyStatus::Optimal);
        assert_eq!(EfficiencyStatus::from_match_factor(1.2000001), EfficiencyStatus::OverTruck);
        assert_eq!(EfficiencyStatus::from_match_factor(0.0), EfficiencyStatus::UnderTruck);
    }

    #[test]
    fn test_status_serde_labels() {
        let json = serde_json::to_string(&EfficiencyStatus::UnderTruck).unwrap();
        assert_eq!(json, "\"Under-truck\"");
        let json = serde_json::to_string(&EfficiencyStatus::OverTruck).unwrap();
        assert_eq!(json, "\"Over-truck\"");
    }
}
