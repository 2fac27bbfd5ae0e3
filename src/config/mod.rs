use serde::{Deserialize, Serialize};

/// Weights used to recombine domain ratings into the projected overall star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingWeights {
    pub health_inspection: f64,
    pub staffing: f64,
    pub quality_measures: f64,
}

/// Tunable rule thresholds and projection constants.
///
/// Several of these figures (the repeat-citation multiplier in particular)
/// are operator policy rather than CMS-published, so they live here instead
/// of in the threshold tables and are always supplied by the caller;
/// `standard()` documents the values the dashboard ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weekend HPRD below this fraction of weekday HPRD triggers a finding.
    pub weekend_ratio_floor: f64,
    pub rn_turnover_ceiling_pct: f64,
    pub total_turnover_ceiling_pct: f64,
    /// Applied to a survey's point total when a tag is cited more than once.
    pub repeat_citation_multiplier: f64,
    /// Added to an admission GG item when imputing an invalid discharge item.
    pub expected_improvement_delta: f64,
    /// Conservative damping applied to estimated impact during projection.
    pub projection_damping: f64,
    pub rating_weights: RatingWeights,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self {
            weekend_ratio_floor: 0.90,
            rn_turnover_ceiling_pct: 50.0,
            total_turnover_ceiling_pct: 60.0,
            repeat_citation_multiplier: 1.2,
            expected_improvement_delta: 1.0,
            projection_damping: 0.5,
            rating_weights: RatingWeights {
                health_inspection: 0.4,
                staffing: 0.3,
                quality_measures: 0.3,
            },
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
