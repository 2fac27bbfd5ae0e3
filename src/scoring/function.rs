use serde::{Deserialize, Serialize};

use crate::thresholds::{DiagnosisCategory, GgRegressionModel};

/// Number of item-level self-care and mobility sub-scores in an assessment.
pub const GG_ITEM_COUNT: usize = 10;

/// Upper bound of the valid GG score range the regression is clamped into.
pub const GG_SCORE_MAX: f64 = 150.0;

/// Expected and observed discharge-function scores for one resident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DischargeFunctionScores {
    pub expected: f64,
    pub observed: f64,
}

/// One coded GG item response from the resident assessment.
///
/// Only `Performance(1..=6)` carries a usable value; the remaining codes are
/// the "activity not attempted" family and must be imputed, never summed as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GgResponse {
    Performance(u8),
    NotAttemptedMedicalCondition,
    NotAttemptedSafetyConcern,
    NotApplicable,
    Missing,
}

impl GgResponse {
    fn performance_value(&self) -> Option<f64> {
        match self {
            GgResponse::Performance(value) if (1..=6).contains(value) => Some(f64::from(*value)),
            _ => None,
        }
    }
}

/// Admission and discharge responses for one GG item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GgItemPair {
    pub admission: GgResponse,
    pub discharge: GgResponse,
}

/// Covariates for one resident's discharge-function evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GgAssessment {
    pub items: [GgItemPair; GG_ITEM_COUNT],
    pub age_years: f64,
    /// Brief Interview for Mental Status, 0-15.
    pub bims_score: f64,
    pub diagnosis: DiagnosisCategory,
    pub comorbidity_count: u32,
    pub length_of_stay_days: f64,
}

impl GgAssessment {
    /// Sum of admission item values; an uncodable admission item floors at 1.
    pub fn admission_score(&self) -> f64 {
        self.items
            .iter()
            .map(|pair| pair.admission.performance_value().unwrap_or(1.0))
            .sum()
    }
}

/// Evaluates the expected-discharge-score linear regression and clamps the
/// result into the valid GG range.
pub fn expected_discharge_score(assessment: &GgAssessment, model: &GgRegressionModel) -> f64 {
    let diagnosis_offset = model
        .diagnosis_offsets
        .get(&assessment.diagnosis)
        .copied()
        .unwrap_or(0.0);

    let raw = model.intercept
        + model.admission_score_coeff * assessment.admission_score()
        + model.age_coeff * assessment.age_years.max(0.0)
        + model.bims_coeff * assessment.bims_score.clamp(0.0, 15.0)
        + model.comorbidity_coeff * f64::from(assessment.comorbidity_count)
        + model.length_of_stay_coeff * assessment.length_of_stay_days.max(0.0)
        + diagnosis_offset;

    raw.clamp(0.0, GG_SCORE_MAX)
}

/// Observed discharge score: the sum of the ten item-level sub-scores.
///
/// An invalid or not-attempted discharge code is imputed as the admission
/// value plus the expected-improvement delta, clamped to the item range
/// [1, 6].
pub fn observed_discharge_score(assessment: &GgAssessment, improvement_delta: f64) -> f64 {
    assessment
        .items
        .iter()
        .map(|pair| match pair.discharge.performance_value() {
            Some(value) => value,
            None => {
                let admission = pair.admission.performance_value().unwrap_or(1.0);
                (admission + improvement_delta).clamp(1.0, 6.0)
            }
        })
        .sum()
}
