//! Loader and truck cycle times
//!
//! Inputs are in seconds, km and km/h; every returned duration is in
//! hours unless the name says otherwise.

use matchfactor_types::DomainError;
use serde::{Deserialize, Serialize};

use crate::model::{HaulerSpec, LoaderSpec, MaterialSpec, OperatingParameters};

/// Fixed dumping time at the tip, in minutes
pub const DUMPING_MINUTES: f64 = 1.4;

/// Fixed spotting/maneuver time under the loader, in minutes
pub const SPOTTING_MINUTES: f64 = 0.7;

/// Floor applied to loader efficiency before dividing by it
pub const MIN_LOADER_EFFICIENCY: f64 = 1e-6;

const SECONDS_PER_HOUR: f64 = 3600.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Bucket loads needed to fill one truck
///
/// # Formula
/// passes = ceil((capacity_tons x fill) / (fill x bucket_m3 x density_loose))
///
/// The fill factor appears on both sides and cancels. Reported pass counts
/// depend on this exact expression, so it is kept as is.
pub fn bucket_passes(
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    loader: &LoaderSpec,
) -> Result<u32, DomainError> {
    let capacity = DomainError::require_positive("capacity_tons", hauler.capacity_tons)?;
    let fill = DomainError::require_positive("fill_factor", material.fill_factor)?;
    let bucket = DomainError::require_positive("bucket_capacity_m3", loader.bucket_capacity_m3)?;
    let density =
        DomainError::require_positive("density_loose_t_per_m3", material.density_loose_t_per_m3)?;

    let passes = (capacity * fill) / (fill * bucket * density);
    Ok(passes.ceil().max(1.0) as u32)
}

/// Loader time spent on one truck, in hours
///
/// # Formula
/// ((cycle_time_s x passes) + reposition_s) / max(efficiency, 1e-6) / 3600
///
/// A misconfigured zero efficiency hits the floor instead of failing.
pub fn loading_cycle_hours(
    loader: &LoaderSpec,
    passes: u32,
    reposition_time_s: f64,
) -> Result<f64, DomainError> {
    let cycle = DomainError::require_positive("cycle_time_s", loader.cycle_time_s)?;
    let reposition = DomainError::require_non_negative("reposition_time_s", reposition_time_s)?;

    let busy_seconds = cycle * f64::from(passes) + reposition;
    Ok(busy_seconds / loader.efficiency.max(MIN_LOADER_EFFICIENCY) / SECONDS_PER_HOUR)
}

/// One-way travel times of a truck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimes {
    pub loaded_hours: f64,
    pub empty_hours: f64,
}

/// Loaded and empty travel time over the haul distance
pub fn hauler_travel_hours(
    hauler: &HaulerSpec,
    haul_distance_km: f64,
) -> Result<TravelTimes, DomainError> {
    let distance = DomainError::require_non_negative("haul_distance_km", haul_distance_km)?;
    let loaded = DomainError::require_positive("speed_loaded_kmh", hauler.speed_loaded_kmh)?;
    let empty = DomainError::require_positive("speed_empty_kmh", hauler.speed_empty_kmh)?;

    Ok(TravelTimes {
        loaded_hours: distance / loaded,
        empty_hours: distance / empty,
    })
}

/// Complete truck cycle in hours: loading, travel both ways, dumping, spotting
pub fn total_cycle_hours(loading_cycle_hours: f64, travel: &TravelTimes) -> f64 {
    loading_cycle_hours
        + travel.loaded_hours
        + DUMPING_MINUTES / MINUTES_PER_HOUR
        + travel.empty_hours
        + SPOTTING_MINUTES / MINUTES_PER_HOUR
}

/// All cycle quantities for one equipment combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleTimes {
    pub bucket_passes: u32,
    pub loading_hours: f64,
    pub travel: TravelTimes,
    pub total_hours: f64,
}

pub fn cycle_times(
    loader: &LoaderSpec,
    hauler: &HaulerSpec,
    material: &MaterialSpec,
    params: &OperatingParameters,
) -> Result<CycleTimes, DomainError> {
    let passes = bucket_passes(hauler, material, loader)?;
    let loading_hours = loading_cycle_hours(loader, passes, params.reposition_time_s)?;
    let travel = hauler_travel_hours(hauler, params.haul_distance_km)?;

    Ok(CycleTimes {
        bucket_passes: passes,
        loading_hours,
        travel,
        total_hours: total_cycle_hours(loading_hours, &travel),
    })
}

/// Truck cycle split into its components, in minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleBreakdown {
    /// Loading, including reposition and the efficiency derating
    pub loading_minutes: f64,
    /// Reposition share already contained in `loading_minutes`
    pub reposition_minutes: f64,
    pub travel_loaded_minutes: f64,
    pub dumping_minutes: f64,
    pub travel_empty_minutes: f64,
    pub spotting_minutes: f64,
    pub total_minutes: f64,
    /// Truck trips per hour
    pub trips_per_hour: f64,
}

impl CycleBreakdown {
    /// (label, minutes, percent of total) for each additive component
    pub fn components(&self) -> Vec<(&'static str, f64, f64)> {
        [
            ("Loading", self.loading_minutes),
            ("Travel (Loaded)", self.travel_loaded_minutes),
            ("Dumping", self.dumping_minutes),
            ("Travel (Empty)", self.travel_empty_minutes),
            ("Maneuver/Spotting", self.spotting_minutes),
        ]
        .into_iter()
        .map(|(label, minutes)| (label, minutes, minutes / self.total_minutes * 100.0))
        .collect()
    }
}

/// Minutes view of `cycle_times` for display
pub fn cycle_breakdown(times: &CycleTimes, reposition_time_s: f64) -> CycleBreakdown {
    let total_minutes = times.total_hours * MINUTES_PER_HOUR;
    CycleBreakdown {
        loading_minutes: times.loading_hours * MINUTES_PER_HOUR,
        reposition_minutes: reposition_time_s / 60.0,
        travel_loaded_minutes: times.travel.loaded_hours * MINUTES_PER_HOUR,
        dumping_minutes: DUMPING_MINUTES,
        travel_empty_minutes: times.travel.empty_hours * MINUTES_PER_HOUR,
        spotting_minutes: SPOTTING_MINUTES,
        total_minutes,
        trips_per_hour: MINUTES_PER_HOUR / total_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    // Bucket passes
    // ==========================================

    #[test]
    fn test_bucket_passes_reference() {
        // (60 x 0.9) / (0.9 x 3.5 x 1.5) = 11.43 -> 12
        assert_eq!(bucket_passes(&hauler(), &material(), &loader()).unwrap(), 12);
    }

    #[test]
    fn test_bucket_passes_at_least_one() {
        let h = HaulerSpec::new("Tiny", 0.01);
        assert_eq!(bucket_passes(&h, &material(), &loader()).unwrap(), 1);
    }

    #[test]
    fn test_bucket_passes_ignores_fill_factor() {
        let mut half = material();
        half.fill_factor = 0.5;
        assert_eq!(
            bucket_passes(&hauler(), &half, &loader()).unwrap(),
            bucket_passes(&hauler(), &material(), &loader()).unwrap()
        );
    }

    #[test]
    fn test_bucket_passes_zero_bucket() {
        let l = LoaderSpec::new("Broken", 0.0);
        let err = bucket_passes(&hauler(), &material(), &l).unwrap_err();
        assert_eq!(
            err,
            DomainError::NonPositive {
                field: "bucket_capacity_m3",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_bucket_passes_nan_density() {
        let mut m = material();
        m.density_loose_t_per_m3 = f64::NAN;
        assert!(matches!(
            bucket_passes(&hauler(), &m, &loader()),
            Err(DomainError::NonPositive {
                field: "density_loose_t_per_m3",
                ..
            })
        ));
    }

    #[test]
    fn test_bucket_passes_zero_fill_factor() {
        let mut m = material();
        m.fill_factor = 0.0;
        assert!(bucket_passes(&hauler(), &m, &loader()).is_err());
    }

    // ==========================================
    // Loading cycle
    // ==========================================

    #[test]
    fn test_loading_cycle_reference() {
        // ((25 x 12) + 20) / 0.92 / 3600 = 0.0966h
        let hours = loading_cycle_hours(&loader(), 12, 20.0).unwrap();
        assert!((hours - 0.096618357).abs() < 1e-8);
    }

    #[test]
    fn test_loading_cycle_zero_efficiency_uses_floor() {
        let l = loader().with_efficiency(0.0);
        let hours = loading_cycle_hours(&l, 1, 0.0).unwrap();
        assert!((hours - 25.0 / 1e-6 / 3600.0).abs() < 1e-3);
    }

    #[test]
    fn test_loading_cycle_negative_reposition() {
        assert!(matches!(
            loading_cycle_hours(&loader(), 12, -1.0),
            Err(DomainError::Negative { .. })
        ));
    }

    // ==========================================
    // Travel and total cycle
    // ==========================================

    #[test]
    fn test_travel_times() {
        let travel = hauler_travel_hours(&hauler(), 3.0).unwrap();
        assert!((travel.loaded_hours - 0.15).abs() < 1e-12);
        assert!((travel.empty_hours - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_travel_zero_speed() {
        let h = hauler().with_speeds(0.0, 30.0);
        assert!(matches!(
            hauler_travel_hours(&h, 3.0),
            Err(DomainError::NonPositive {
                field: "speed_loaded_kmh",
                ..
            })
        ));
    }

    #[test]
    fn test_total_cycle_adds_fixed_times() {
        let travel = TravelTimes {
            loaded_hours: 0.0,
            empty_hours: 0.0,
        };
        // Dumping 1.4 min + spotting 0.7 min = 2.1 min
        assert!((total_cycle_hours(0.0, &travel) - 2.1 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_cycle_times_reference() {
        let params = OperatingParameters::default();
        let times = cycle_times(&loader(), &hauler(), &material(), &params).unwrap();
        assert_eq!(times.bucket_passes, 12);
        assert!((times.total_hours - 0.381618357).abs() < 1e-8);
    }

    // ==========================================
    // Breakdown
    // ==========================================

    #[test]
    fn test_breakdown_sums_to_total() {
        let params = OperatingParameters::default();
        let times = cycle_times(&loader(), &hauler(), &material(), &params).unwrap();
        let breakdown = cycle_breakdown(&times, params.reposition_time_s);

        let minutes: f64 = breakdown.components().iter().map(|c| c.1).sum();
        let percent: f64 = breakdown.components().iter().map(|c| c.2).sum();
        assert!((minutes - breakdown.total_minutes).abs() < 1e-9);
        assert!((percent - 100.0).abs() < 1e-9);
        assert!((breakdown.total_minutes - times.total_hours * 60.0).abs() < 1e-12);
        assert!((breakdown.reposition_minutes - 20.0 / 60.0).abs() < 1e-12);
        assert!((breakdown.trips_per_hour * breakdown.total_minutes - 60.0).abs() < 1e-9);
    }
}
