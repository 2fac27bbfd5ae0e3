//! Rating analysis facade.
//!
//! `AnalysisEngine` is the one public entry point: it runs each domain's rule
//! set over whatever data slices the caller supplies, caps every estimated
//! impact at the headroom to 5 stars, and returns the ranked recommendation
//! list. Everything is synchronous and side-effect-free; identical inputs
//! always produce an identical list.

pub mod gap;
pub mod ranking;
mod projection;
mod rules;

pub use gap::{next_star_gap, StarGap};
pub use projection::ProjectedRatings;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::{
    DeficiencyRecord, Facility, HealthInspectionRecord, QualityMeasureSet, Recommendation,
    StaffingMetrics,
};
use crate::error::EngineError;
use crate::scoring::{
    expected_discharge_score, observed_discharge_score, DischargeFunctionScores, GgAssessment,
};
use crate::thresholds::ThresholdTables;

/// Stateless engine binding the threshold tables and rule configuration.
pub struct AnalysisEngine {
    tables: ThresholdTables,
    config: EngineConfig,
}

impl AnalysisEngine {
    pub fn new(tables: ThresholdTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Engine with the published CMS tables and shipped rule configuration.
    pub fn standard() -> Self {
        Self::new(ThresholdTables::standard(), EngineConfig::standard())
    }

    pub fn tables(&self) -> &ThresholdTables {
        &self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Produces the ranked improvement recommendations for one facility.
    ///
    /// Each data slice is independently optional; a missing slice skips that
    /// domain's checks and is never an error. An empty result means no
    /// issues were detected, not failure.
    pub fn analyze(
        &self,
        facility: &Facility,
        inspections: Option<&[HealthInspectionRecord]>,
        citations: Option<&[DeficiencyRecord]>,
        staffing: Option<&StaffingMetrics>,
        quality_measures: Option<&QualityMeasureSet>,
    ) -> Result<Vec<Recommendation>, EngineError> {
        let mut recommendations = Vec::new();

        if let Some(staffing) = staffing {
            let fired = rules::staffing::evaluate(facility, staffing, &self.tables, &self.config)?;
            debug!(ccn = %facility.ccn.0, domain = "staffing", fired = fired.len());
            recommendations.extend(fired);
        }

        if let Some(measures) = quality_measures {
            let fired = rules::quality::evaluate(facility, measures, &self.tables);
            debug!(ccn = %facility.ccn.0, domain = "quality_measures", fired = fired.len());
            recommendations.extend(fired);
        }

        if inspections.is_some() || citations.is_some() {
            let fired = rules::inspection::evaluate(
                facility,
                inspections.unwrap_or_default(),
                citations.unwrap_or_default(),
            );
            debug!(ccn = %facility.ccn.0, domain = "health_inspection", fired = fired.len());
            recommendations.extend(fired);
        }

        for recommendation in &mut recommendations {
            let headroom = f64::from(
                5u8.saturating_sub(facility.ratings.for_domain(recommendation.category)),
            );
            recommendation.estimated_impact =
                recommendation.estimated_impact.clamp(0.0, headroom);
        }

        ranking::rank(&mut recommendations);
        info!(
            ccn = %facility.ccn.0,
            recommendations = recommendations.len(),
            "facility analysis complete"
        );
        Ok(recommendations)
    }

    /// Expected (regression) and observed discharge-function scores for one
    /// resident assessment, for display next to the quality-measure panel.
    pub fn discharge_function_scores(&self, assessment: &GgAssessment) -> DischargeFunctionScores {
        DischargeFunctionScores {
            expected: expected_discharge_score(assessment, &self.tables.gg),
            observed: observed_discharge_score(
                assessment,
                self.config.expected_improvement_delta,
            ),
        }
    }

    /// Projects the facility's ratings forward assuming the selected
    /// recommendations are carried out.
    pub fn project_rating(
        &self,
        facility: &Facility,
        selected: &[Recommendation],
    ) -> ProjectedRatings {
        projection::project(facility, selected, &self.config)
    }
}
