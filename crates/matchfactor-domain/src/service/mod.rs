//! Domain services
//!
//! Pure functions over the model types. Nothing here keeps state between
//! calls, so independent calculations can run on any thread.

pub mod cycle_time;
pub mod match_factor;
pub mod optimal_fleet;
pub mod sweep;

pub use cycle_time::{
    bucket_passes, cycle_breakdown, cycle_times, hauler_travel_hours, loading_cycle_hours,
    total_cycle_hours, CycleBreakdown, CycleTimes, TravelTimes,
};
pub use match_factor::{
    calculate_match_factor, fleet_productivity, loader_max_productivity, match_factor,
    truck_productivity, FleetProductivity, LoaderCapacity, UnitProductivity,
};
pub use optimal_fleet::{optimal_trucks_for_mf1, recommend_fleet, FleetRecommendation};
pub use sweep::{
    sweep_distance, sweep_trucks, DistanceRange, Sweep, SweepAxis, SweepPoint, DEFAULT_TRUCK_RANGE,
};
