//! Fleet analysis use cases
//!
//! Turns catalog names plus per-request choices into engine inputs and
//! collects everything a report needs. The catalog is only borrowed;
//! speed overrides produce a new `HaulerSpec`.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use matchfactor_domain::service::{
    calculate_match_factor, cycle_breakdown, cycle_times, recommend_fleet, sweep_distance,
    sweep_trucks, CycleBreakdown, DistanceRange, FleetRecommendation, SweepAxis,
};
use matchfactor_domain::{
    CalculationResult, EquipmentCatalog, HaulerSpec, LoaderSpec, MaterialSpec,
    OperatingParameters,
};
use matchfactor_types::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Equipment picked by name, with optional truck speed choices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSelection {
    pub loader: String,
    pub hauler: String,
    pub material: String,
    /// Overrides the catalog loaded speed (km/h)
    #[serde(default)]
    pub speed_loaded_kmh: Option<f64>,
    /// Overrides the catalog empty speed (km/h)
    #[serde(default)]
    pub speed_empty_kmh: Option<f64>,
}

impl EquipmentSelection {
    pub fn new(
        loader: impl Into<String>,
        hauler: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            loader: loader.into(),
            hauler: hauler.into(),
            material: material.into(),
            speed_loaded_kmh: None,
            speed_empty_kmh: None,
        }
    }

    pub fn with_speeds(mut self, loaded: Option<f64>, empty: Option<f64>) -> Self {
        self.speed_loaded_kmh = loaded;
        self.speed_empty_kmh = empty;
        self
    }
}

/// Equipment ready for the engine
struct ResolvedEquipment<'a> {
    loader: &'a LoaderSpec,
    hauler: HaulerSpec,
    material: &'a MaterialSpec,
}

/// Full single-point analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetAnalysis {
    pub loader: LoaderSpec,
    /// Hauler after speed overrides
    pub hauler: HaulerSpec,
    pub material: MaterialSpec,
    pub params: OperatingParameters,
    pub result: CalculationResult,
    pub breakdown: CycleBreakdown,
    pub recommendation: FleetRecommendation,
}

/// A sweep evaluated and ready for display or export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub generated_at: DateTime<Utc>,
    pub loader: String,
    pub hauler: String,
    pub material: String,
    pub speed_loaded_kmh: f64,
    pub speed_empty_kmh: f64,
    /// Inputs held fixed; the swept field is replaced per point
    pub params: OperatingParameters,
    pub axis: SweepAxis,
    pub points: Vec<CalculationResult>,
}

impl SweepReport {
    /// Point whose match factor is closest to 1.0
    pub fn closest_to_match(&self) -> Option<&CalculationResult> {
        self.points
            .iter()
            .min_by(|a, b| a.mf_deviation().total_cmp(&b.mf_deviation()))
    }
}

pub struct FleetAnalyzer<'a> {
    catalog: &'a EquipmentCatalog,
}

impl<'a> FleetAnalyzer<'a> {
    pub fn new(catalog: &'a EquipmentCatalog) -> Self {
        Self { catalog }
    }

    fn resolve(&self, selection: &EquipmentSelection) -> Result<ResolvedEquipment<'a>> {
        let loader = self.catalog.loader(&selection.loader)?;
        let template = self.catalog.hauler(&selection.hauler)?;
        let material = self.catalog.material(&selection.material)?;

        let hauler = template.with_speeds(
            selection.speed_loaded_kmh.unwrap_or(template.speed_loaded_kmh),
            selection.speed_empty_kmh.unwrap_or(template.speed_empty_kmh),
        );
        debug!(
            loader = %loader.name,
            hauler = %hauler.name,
            material = %material.name,
            speed_loaded = hauler.speed_loaded_kmh,
            speed_empty = hauler.speed_empty_kmh,
            "equipment resolved"
        );

        Ok(ResolvedEquipment {
            loader,
            hauler,
            material,
        })
    }

    /// Result, cycle breakdown and fleet recommendation for one scenario
    pub fn analyze(
        &self,
        selection: &EquipmentSelection,
        params: &OperatingParameters,
    ) -> Result<FleetAnalysis> {
        let eq = self.resolve(selection)?;

        let result = calculate_match_factor(eq.loader, &eq.hauler, eq.material, params)?;
        let times = cycle_times(eq.loader, &eq.hauler, eq.material, params)?;
        let breakdown = cycle_breakdown(&times, params.reposition_time_s);
        let recommendation = recommend_fleet(eq.loader, &eq.hauler, eq.material, params)?;

        info!(
            match_factor = result.match_factor,
            status = %result.status,
            recommended = recommendation.recommended_trucks,
            "analysis complete"
        );

        Ok(FleetAnalysis {
            loader: eq.loader.clone(),
            hauler: eq.hauler,
            material: eq.material.clone(),
            params: *params,
            result,
            breakdown,
            recommendation,
        })
    }

    /// Whole-truck recommendation only
    pub fn recommend(
        &self,
        selection: &EquipmentSelection,
        params: &OperatingParameters,
    ) -> Result<FleetRecommendation> {
        let eq = self.resolve(selection)?;
        Ok(recommend_fleet(eq.loader, &eq.hauler, eq.material, params)?)
    }

    /// Match factor and productivity for each truck count
    pub fn sweep_trucks(
        &self,
        selection: &EquipmentSelection,
        params: &OperatingParameters,
        truck_range: RangeInclusive<u32>,
    ) -> Result<SweepReport> {
        let eq = self.resolve(selection)?;
        let sweep = sweep_trucks(eq.loader, &eq.hauler, eq.material, params, truck_range);
        let points = sweep.collect_points()?;
        Ok(self.report(selection, &eq, params, sweep.axis().clone(), points))
    }

    /// Match factor and productivity for each haul distance
    pub fn sweep_distance(
        &self,
        selection: &EquipmentSelection,
        params: &OperatingParameters,
        distance_range: DistanceRange,
    ) -> Result<SweepReport> {
        let eq = self.resolve(selection)?;
        let sweep = sweep_distance(eq.loader, &eq.hauler, eq.material, params, distance_range);
        let points = sweep.collect_points()?;
        Ok(self.report(selection, &eq, params, sweep.axis().clone(), points))
    }

    fn report(
        &self,
        selection: &EquipmentSelection,
        eq: &ResolvedEquipment<'_>,
        params: &OperatingParameters,
        axis: SweepAxis,
        points: Vec<CalculationResult>,
    ) -> SweepReport {
        info!(axis = axis.label(), points = points.len(), "sweep complete");
        SweepReport {
            generated_at: Utc::now(),
            loader: selection.loader.trim().to_string(),
            hauler: selection.hauler.trim().to_string(),
            material: selection.material.trim().to_string(),
            speed_loaded_kmh: eq.hauler.speed_loaded_kmh,
            speed_empty_kmh: eq.hauler.speed_empty_kmh,
            params: *params,
            axis,
            points,
        }
    }
}
