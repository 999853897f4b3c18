//! Sensitivity sweeps
//!
//! A sweep re-runs the full pipeline once per value of one swept input,
//! holding everything else fixed. Points are produced lazily from an
//! index, so the same `Sweep` can be iterated any number of times and
//! each point is independent of the others.

use std::ops::RangeInclusive;

use matchfactor_types::DomainError;
use serde::{Deserialize, Serialize};

use super::match_factor::calculate_match_factor;
use crate::model::{CalculationResult, HaulerSpec, LoaderSpec, MaterialSpec, OperatingParameters};

/// Truck counts swept by default
pub const DEFAULT_TRUCK_RANGE: RangeInclusive<u32> = 1..=20;

/// Most points a distance sweep may produce
pub const MAX_DISTANCE_POINTS: usize = 10_000;

/// Evenly spaced haul distances, both ends included
///
/// Only constructed through `new`, which also guards deserialization, so
/// every value describes a finite, bounded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistanceRangeFields")]
pub struct DistanceRange {
    start_km: f64,
    end_km: f64,
    step_km: f64,
    #[serde(skip_serializing)]
    points: usize,
}

#[derive(Deserialize)]
struct DistanceRangeFields {
    start_km: f64,
    end_km: f64,
    step_km: f64,
}

impl TryFrom<DistanceRangeFields> for DistanceRange {
    type Error = DomainError;

    fn try_from(fields: DistanceRangeFields) -> Result<Self, Self::Error> {
        DistanceRange::new(fields.start_km, fields.end_km, fields.step_km)
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            start_km: 0.5,
            end_km: 15.0,
            step_km: 0.5,
            points: 30,
        }
    }
}

impl DistanceRange {
    pub fn new(start_km: f64, end_km: f64, step_km: f64) -> Result<Self, DomainError> {
        DomainError::require_non_negative("start_km", start_km)?;
        DomainError::require_non_negative("end_km", end_km)?;
        DomainError::require_positive("step_km", step_km)?;
        let span = DomainError::require_non_negative("end_km - start_km", end_km - start_km)?;

        // Small slack so 15.0 is not lost to 14.5 / 0.5 = 28.999...
        let steps = (span / step_km + 1e-9).floor();
        if steps >= MAX_DISTANCE_POINTS as f64 {
            return Err(DomainError::TooManyPoints {
                points: steps + 1.0,
                max: MAX_DISTANCE_POINTS,
            });
        }

        Ok(Self {
            start_km,
            end_km,
            step_km,
            points: steps as usize + 1,
        })
    }

    pub fn start_km(&self) -> f64 {
        self.start_km
    }

    pub fn end_km(&self) -> f64 {
        self.end_km
    }

    pub fn step_km(&self) -> f64 {
        self.step_km
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points
    }

    /// Distance of point `index`, computed from the index rather than accumulated
    pub fn value(&self, index: usize) -> f64 {
        self.start_km + index as f64 * self.step_km
    }
}

/// The swept input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SweepAxis {
    Trucks(RangeInclusive<u32>),
    Distance(DistanceRange),
}

impl SweepAxis {
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::Trucks(_) => "trucks",
            SweepAxis::Distance(_) => "distance_km",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SweepAxis::Trucks(range) => range.clone().count(),
            SweepAxis::Distance(range) => range.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One swept value and the result it produced
pub type SweepPoint = CalculationResult;

/// A finite, restartable series of calculations
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    loader: &'a LoaderSpec,
    hauler: &'a HaulerSpec,
    material: &'a MaterialSpec,
    params: OperatingParameters,
    axis: SweepAxis,
}

impl<'a> Sweep<'a> {
    pub fn axis(&self) -> &SweepAxis {
        &self.axis
    }

    pub fn params(&self) -> &OperatingParameters {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    fn params_at(&self, index: usize) -> OperatingParameters {
        match &self.axis {
            SweepAxis::Trucks(range) => self.params.with_trucks(range.start() + index as u32),
            SweepAxis::Distance(range) => self.params.with_distance(range.value(index)),
        }
    }

    /// Points in increasing order of the swept value
    pub fn iter(&self) -> impl Iterator<Item = Result<SweepPoint, DomainError>> + '_ {
        (0..self.len()).map(move |index| {
            let params = self.params_at(index);
            tracing::trace!(
                index,
                trucks = params.num_trucks,
                distance_km = params.haul_distance_km,
                "sweep point"
            );
            calculate_match_factor(self.loader, self.hauler, self.material, &params)
        })
    }

    /// Evaluate every point, stopping at the first failure
    pub fn collect_points(&self) -> Result<Vec<SweepPoint>, DomainError> {
        self.iter().collect()
    }
}

/// Vary the truck count, holding distance, job condition and reposition fixed
pub fn sweep_trucks<'a>(
    loader: &'a LoaderSpec,
    hauler: &'a HaulerSpec,
    material: &'a MaterialSpec,
    params: &OperatingParameters,
    truck_range: RangeInclusive<u32>,
) -> Sweep<'a> {
    Sweep {
        loader,
        hauler,
        material,
        params: *params,
        axis: SweepAxis::Trucks(truck_range),
    }
}

/// Vary the haul distance, holding truck count, job condition and reposition fixed
///
/// Reposition time comes from `params` like every other held input, not
/// from the 20 s default; figures computed against the default differ
/// whenever `params` sets another reposition time.
pub fn sweep_distance<'a>(
    loader: &'a LoaderSpec,
    hauler: &'a HaulerSpec,
    material: &'a MaterialSpec,
    params: &OperatingParameters,
    distance_range: DistanceRange,
) -> Sweep<'a> {
    Sweep {
        loader,
        hauler,
        material,
        params: *params,
        axis: SweepAxis::Distance(distance_range),
    }
}
