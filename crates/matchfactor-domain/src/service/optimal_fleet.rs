//! Truck count for a match factor of 1.0

use matchfactor_types::DomainError;
use serde::{Deserialize, Serialize};

use super::cycle_time::cycle_times;
use super::match_factor::calculate_match_factor;
use crate::model::{CalculationResult, HaulerSpec, LoaderSpec, MaterialSpec, OperatingParameters};

/// Exact (fractional) truck count at which the match factor is 1.0
///
/// Setting `n x loading / total = 1` gives `n = total / loading`. The
/// `num_trucks` field of `params` plays no part.
pub fn optimal_trucks_for_mf1(
    loader: &LoaderSpec,
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    params: &OperatingParameters,
) -> Result<f64, DomainError> {
    let times = cycle_times(loader, hauler, material, params)?;
    let loading = DomainError::require_positive("loading_cycle_hours", times.loading_hours)?;
    Ok(times.total_hours / loading)
}

/// Whole-truck fleet recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetRecommendation {
    /// Fractional count from the closed form
    pub exact_trucks: f64,
    /// `exact_trucks` rounded up
    pub recommended_trucks: u32,
    /// Engine re-run with `recommended_trucks`
    pub achieved: CalculationResult,
}

/// Round the exact count up and report the match factor actually reached
///
/// The recommended count is the smallest whose match factor is at least
/// 1.0. `ceil` of the closed form gives it except when rounding in
/// `total / loading` lands on the wrong side of an integer, so the
/// neighbouring count is checked against the engine.
pub fn recommend_fleet(
    loader: &LoaderSpec,
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    params: &OperatingParameters,
) -> Result<FleetRecommendation, DomainError> {
    let exact_trucks = optimal_trucks_for_mf1(loader, hauler, material, params)?;
    let run = |trucks: u32| {
        calculate_match_factor(loader, hauler, material, &params.with_trucks(trucks))
    };

    let mut recommended_trucks = exact_trucks.ceil().max(1.0) as u32;
    let mut achieved = run(recommended_trucks)?;

    if achieved.match_factor < 1.0 {
        recommended_trucks = recommended_trucks.saturating_add(1);
        achieved = run(recommended_trucks)?;
    } else if recommended_trucks > 1 {
        let fewer = run(recommended_trucks - 1)?;
        if fewer.match_factor >= 1.0 {
            recommended_trucks -= 1;
            achieved = fewer;
        }
    }

    Ok(FleetRecommendation {
        exact_trucks,
        recommended_trucks,
        achieved,
    })
}
