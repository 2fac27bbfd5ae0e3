use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::{DomainCategory, Facility, Recommendation};

/// Ratings the facility could reach if the selected recommendations land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRatings {
    pub overall: u8,
    pub health_inspection: u8,
    pub staffing: u8,
    pub quality_measures: u8,
}

/// Projects each domain rating forward under the damped impact sum, capping
/// the gain at the headroom to 5 stars, then recombines the rounded domain
/// stars into an overall rating via the fixed weights.
pub(crate) fn project(
    facility: &Facility,
    selected: &[Recommendation],
    config: &EngineConfig,
) -> ProjectedRatings {
    let health = projected_domain(facility, selected, DomainCategory::HealthInspection, config);
    let staffing = projected_domain(facility, selected, DomainCategory::Staffing, config);
    let quality = projected_domain(facility, selected, DomainCategory::QualityMeasures, config);

    let weights = config.rating_weights;
    let overall_raw = weights.health_inspection * f64::from(health)
        + weights.staffing * f64::from(staffing)
        + weights.quality_measures * f64::from(quality);

    ProjectedRatings {
        overall: round_star(overall_raw),
        health_inspection: health,
        staffing,
        quality_measures: quality,
    }
}

fn projected_domain(
    facility: &Facility,
    selected: &[Recommendation],
    category: DomainCategory,
    config: &EngineConfig,
) -> u8 {
    let current = facility.ratings.for_domain(category);
    let impact_sum: f64 = selected
        .iter()
        .filter(|rec| rec.category == category)
        .map(|rec| rec.estimated_impact.max(0.0))
        .sum();
    let headroom = f64::from(5u8.saturating_sub(current));
    let gain = (impact_sum * config.projection_damping).clamp(0.0, headroom);
    round_star(f64::from(current) + gain)
}

fn round_star(value: f64) -> u8 {
    (value.round().clamp(1.0, 5.0)) as u8
}
