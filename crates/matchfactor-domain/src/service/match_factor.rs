//! Match factor and productivity
//!
//! Match factor = trucks x loader time per truck / truck cycle time.
//! Fleet productivity is the per-truck rate times the fleet size, never
//! more than the loader can dig.

use matchfactor_types::DomainError;
use serde::{Deserialize, Serialize};

use super::cycle_time::cycle_times;
use crate::model::{
    CalculationResult, EfficiencyStatus, HaulerSpec, LoaderSpec, MaterialSpec,
    OperatingParameters,
};

/// Match factor for a fleet of `num_trucks`
///
/// # Formula
/// num_trucks x loading_cycle_hours / total_cycle_hours
///
/// The result is always finite; an overflowing product is a `DomainError`.
pub fn match_factor(
    num_trucks: u32,
    loading_cycle_hours: f64,
    total_cycle_hours: f64,
) -> Result<f64, DomainError> {
    if num_trucks == 0 {
        return Err(DomainError::NoTrucks);
    }
    let loading = DomainError::require_non_negative("loading_cycle_hours", loading_cycle_hours)?;
    let total = DomainError::require_positive("total_cycle_hours", total_cycle_hours)?;

    // Overflowing inputs must not reach status classification as inf or NaN
    DomainError::require_non_negative("match_factor", f64::from(num_trucks) * loading / total)
}

/// Productivity of a single truck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitProductivity {
    pub tons_per_hour: f64,
    pub bcm_per_hour: f64,
}

/// tons/h = capacity x truck efficiency x job efficiency / cycle hours;
/// BCM/h = tons/h / bank density
pub fn truck_productivity(
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    job_efficiency: f64,
    total_cycle_hours: f64,
) -> Result<UnitProductivity, DomainError> {
    let total = DomainError::require_positive("total_cycle_hours", total_cycle_hours)?;
    let density =
        DomainError::require_positive("density_bank_t_per_m3", material.density_bank_t_per_m3)?;

    let tons_per_hour = hauler.capacity_tons * hauler.efficiency * job_efficiency / total;
    Ok(UnitProductivity {
        tons_per_hour,
        bcm_per_hour: tons_per_hour / density,
    })
}

/// Digging ceiling of the loader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoaderCapacity {
    pub bcm_per_hour: f64,
    pub tons_per_hour: f64,
}

/// BCM/h = bucket x fill x swell x loader efficiency x job efficiency x (3600 / cycle_s)
pub fn loader_max_productivity(
    loader: &LoaderSpec,
    material: &MaterialSpec,
    job_efficiency: f64,
) -> Result<LoaderCapacity, DomainError> {
    let cycle = DomainError::require_positive("cycle_time_s", loader.cycle_time_s)?;

    let bcm_per_hour = loader.bucket_capacity_m3
        * material.fill_factor
        * material.swell_factor
        * loader.efficiency
        * job_efficiency
        * (3600.0 / cycle);
    Ok(LoaderCapacity {
        bcm_per_hour,
        tons_per_hour: material.bcm_to_tons(bcm_per_hour),
    })
}

/// Fleet totals after the loader ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetProductivity {
    pub bcm_per_hour: f64,
    pub tons_per_hour: f64,
    /// True when the loader ceiling was the binding limit
    pub loader_limited: bool,
}

/// Saturating fleet total: `min(trucks x unit, loader)` in BCM, with tonnes
/// always derived from the BCM figure through bank density.
pub fn fleet_productivity(
    num_trucks: u32,
    unit: &UnitProductivity,
    loader: &LoaderCapacity,
    material: &MaterialSpec,
) -> Result<FleetProductivity, DomainError> {
    if num_trucks == 0 {
        return Err(DomainError::NoTrucks);
    }

    let naive_bcm = f64::from(num_trucks) * unit.bcm_per_hour;
    let bcm_per_hour = naive_bcm.min(loader.bcm_per_hour);
    Ok(FleetProductivity {
        bcm_per_hour,
        tons_per_hour: material.bcm_to_tons(bcm_per_hour),
        loader_limited: naive_bcm > loader.bcm_per_hour,
    })
}

/// Run the whole pipeline for one equipment combination
pub fn calculate_match_factor(
    loader: &LoaderSpec,
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    params: &OperatingParameters,
) -> Result<CalculationResult, DomainError> {
    if params.num_trucks == 0 {
        return Err(DomainError::NoTrucks);
    }
    let job_efficiency = params.job_efficiency();

    let times = cycle_times(loader, hauler, material, params)?;
    let mf = match_factor(params.num_trucks, times.loading_hours, times.total_hours)?;

    let unit = truck_productivity(hauler, material, job_efficiency, times.total_hours)?;
    let loader_max = loader_max_productivity(loader, material, job_efficiency)?;
    let fleet = fleet_productivity(params.num_trucks, &unit, &loader_max, material)?;

    Ok(CalculationResult {
        num_trucks: params.num_trucks,
        haul_distance_km: params.haul_distance_km,
        match_factor: mf,
        status: EfficiencyStatus::from_match_factor(mf),
        fleet_bcm_per_hour: fleet.bcm_per_hour,
        fleet_tons_per_hour: fleet.tons_per_hour,
        unit_bcm_per_hour: unit.bcm_per_hour,
        unit_tons_per_hour: unit.tons_per_hour,
        loader_max_bcm_per_hour: loader_max.bcm_per_hour,
        loader_limited: fleet.loader_limited,
        bucket_passes: times.bucket_passes,
        loading_cycle_hours: times.loading_hours,
        total_cycle_hours: times.total_hours,
        job_efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchfactor_types::JobCondition;

    fn loader() -> LoaderSpec {
        LoaderSpec::new("PC850", 3.5)
            .with_cycle_time(25.0)
            .with_efficiency(0.92)
    }

    fn hauler() -> HaulerSpec {
        HaulerSpec::new("HD465", 60.0).with_speeds(20.0, 30.0)
    }

    fn material() -> MaterialSpec {
        MaterialSpec::with_defaults("Overburden")
    }

    // ==========================================
    // match_factor
    // ==========================================

    #[test]
    fn test_match_factor_formula() {
        let mf = match_factor(4, 0.1, 0.5).unwrap();
        assert!((mf - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_match_factor_equals_trucks_when_no_travel() {
        assert_eq!(match_factor(7, 0.25, 0.25).unwrap(), 7.0);
    }

    #[test]
    fn test_match_factor_rejects_zero_trucks() {
        assert_eq!(match_factor(0, 0.1, 0.5), Err(DomainError::NoTrucks));
    }

    #[test]
    fn test_match_factor_rejects_zero_cycle() {
        assert!(matches!(
            match_factor(3, 0.1, 0.0),
            Err(DomainError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_match_factor_overflow_is_an_error() {
        assert!(matches!(
            match_factor(u32::MAX, f64::MAX, 1e-300),
            Err(DomainError::NonFinite {
                field: "match_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_infinite_cycle_time_rejected_not_classified() {
        let l = loader().with_cycle_time(f64::INFINITY);
        let params = OperatingParameters::default();
        assert!(matches!(
            calculate_match_factor(&l, &hauler(), &material(), &params),
            Err(DomainError::NonFinite {
                field: "cycle_time_s",
                ..
            })
        ));
    }

    // ==========================================
    // Productivity
    // ==========================================

    #[test]
    fn test_truck_productivity() {
        // 60 x 0.92 x 0.75 / 0.5 = 82.8 t/h -> 41.4 BCM/h
        let unit = truck_productivity(&hauler(), &material(), 0.75, 0.5).unwrap();
        assert!((unit.tons_per_hour - 82.8).abs() < 1e-9);
        assert!((unit.bcm_per_hour - 41.4).abs() < 1e-9);
    }

    #[test]
    fn test_truck_productivity_zero_bank_density() {
        let mut m = material();
        m.density_bank_t_per_m3 = 0.0;
        assert!(matches!(
            truck_productivity(&hauler(), &m, 0.75, 0.5),
            Err(DomainError::NonPositive {
                field: "density_bank_t_per_m3",
                ..
            })
        ));
    }

    #[test]
    fn test_loader_max_productivity() {
        // 3.5 x 0.9 x 0.8 x 0.92 x 0.75 x 144 = 250.3872 BCM/h
        let cap = loader_max_productivity(&loader(), &material(), 0.75).unwrap();
        assert!((cap.bcm_per_hour - 250.3872).abs() < 1e-9);
        assert!((cap.tons_per_hour - 500.7744).abs() < 1e-9);
    }

    #[test]
    fn test_loader_max_zero_cycle_time() {
        let l = loader().with_cycle_time(0.0);
        assert!(loader_max_productivity(&l, &material(), 0.75).is_err());
    }

    #[test]
    fn test_fleet_below_loader_ceiling() {
        let unit = UnitProductivity {
            tons_per_hour: 100.0,
            bcm_per_hour: 50.0,
        };
        let cap = LoaderCapacity {
            bcm_per_hour: 250.0,
            tons_per_hour: 500.0,
        };
        let fleet = fleet_productivity(3, &unit, &cap, &material()).unwrap();
        assert!((fleet.bcm_per_hour - 150.0).abs() < 1e-12);
        assert!((fleet.tons_per_hour - 300.0).abs() < 1e-12);
        assert!(!fleet.loader_limited);
    }

    #[test]
    fn test_fleet_clamped_to_loader_ceiling() {
        let unit = UnitProductivity {
            tons_per_hour: 100.0,
            bcm_per_hour: 50.0,
        };
        let cap = LoaderCapacity {
            bcm_per_hour: 250.0,
            tons_per_hour: 500.0,
        };
        let fleet = fleet_productivity(8, &unit, &cap, &material()).unwrap();
        assert_eq!(fleet.bcm_per_hour, 250.0);
        // Tonnes follow the capped BCM through bank density
        assert_eq!(fleet.tons_per_hour, 500.0);
        assert!(fleet.loader_limited);
    }

    #[test]
    fn test_fleet_rejects_zero_trucks() {
        let unit = UnitProductivity {
            tons_per_hour: 1.0,
            bcm_per_hour: 0.5,
        };
        let cap = LoaderCapacity {
            bcm_per_hour: 1.0,
            tons_per_hour: 2.0,
        };
        assert_eq!(
            fleet_productivity(0, &unit, &cap, &material()),
            Err(DomainError::NoTrucks)
        );
    }

    // ==========================================
    // Full pipeline
    // ==========================================

    #[test]
    fn test_calculate_reference_scenario() {
        let params = OperatingParameters::default();
        let r = calculate_match_factor(&loader(), &hauler(), &material(), &params).unwrap();

        assert_eq!(r.bucket_passes, 12);
        assert!((r.match_factor - 1.265902905).abs() < 1e-8);
        assert_eq!(r.status, EfficiencyStatus::OverTruck);
        assert!((r.unit_tons_per_hour - 108.485347174).abs() < 1e-6);
        assert!(r.loader_limited);
        assert!((r.fleet_bcm_per_hour - 250.3872).abs() < 1e-9);
        assert_eq!(r.job_efficiency, 0.75);
    }

    #[test]
    fn test_calculate_under_truck() {
        let params = OperatingParameters::default().with_trucks(2);
        let r = calculate_match_factor(&loader(), &hauler(), &material(), &params).unwrap();
        assert_eq!(r.status, EfficiencyStatus::UnderTruck);
        assert!(!r.loader_limited);
        assert!((r.fleet_bcm_per_hour - 2.0 * r.unit_bcm_per_hour).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_job_condition_scales_productivity() {
        let average = OperatingParameters::default().with_trucks(1);
        let good = average.with_job_condition(JobCondition::Good);
        let a = calculate_match_factor(&loader(), &hauler(), &material(), &average).unwrap();
        let g = calculate_match_factor(&loader(), &hauler(), &material(), &good).unwrap();

        assert!((g.unit_tons_per_hour / a.unit_tons_per_hour - 0.83 / 0.75).abs() < 1e-12);
        // Match factor does not depend on job condition
        assert_eq!(a.match_factor, g.match_factor);
    }

    #[test]
    fn test_calculate_rejects_zero_trucks() {
        let params = OperatingParameters::default().with_trucks(0);
        assert_eq!(
            calculate_match_factor(&loader(), &hauler(), &material(), &params),
            Err(DomainError::NoTrucks)
        );
    }
}
