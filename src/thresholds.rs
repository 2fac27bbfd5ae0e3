use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{MeasureCode, SeverityLetter};
use crate::error::EngineError;

/// Minimum metric value required for each star level from 5 down to 2.
///
/// Anything below the level-2 breakpoint is implicitly level 1. A metric
/// exactly equal to a breakpoint earns that level, never the one below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBreakpoints {
    levels: BTreeMap<u8, f64>,
}

impl StarBreakpoints {
    /// Builds a table from `(level, minimum value)` pairs covering levels 2-5.
    pub fn new(entries: [(u8, f64); 4]) -> Result<Self, EngineError> {
        let levels: BTreeMap<u8, f64> = entries.into_iter().collect();
        for level in 2..=5 {
            if !levels.contains_key(&level) {
                return Err(EngineError::MissingBreakpoint { level });
            }
        }
        let mut previous = f64::NEG_INFINITY;
        for level in 2..=5u8 {
            let value = levels[&level];
            if value <= previous {
                return Err(EngineError::NonDescendingBreakpoints);
            }
            previous = value;
        }
        Ok(Self { levels })
    }

    pub fn breakpoint(&self, level: u8) -> Result<f64, EngineError> {
        self.levels
            .get(&level)
            .copied()
            .ok_or(EngineError::MissingBreakpoint { level })
    }

    fn from_descending(five: f64, four: f64, three: f64, two: f64) -> Self {
        Self {
            levels: BTreeMap::from([(5, five), (4, four), (3, three), (2, two)]),
        }
    }
}

/// Case-mix adjusted HPRD breakpoints for the two staffing measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingBreakpoints {
    pub total_nurse: StarBreakpoints,
    pub rn: StarBreakpoints,
}

/// Comparison direction for one quality measure; consulted by a single
/// generic comparator rather than per-measure branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureDirection {
    HigherIsWorse,
    HigherIsBetter,
}

/// Benchmark band a measure value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkTier {
    Excellent,
    Good,
    Average,
    Poor,
}

/// National benchmark band for one quality measure.
///
/// For a higher-is-worse measure the boundaries ascend excellent < good <
/// average; for higher-is-better they descend. `average` doubles as the
/// recommendation trigger: a value on the wrong side of it is `Poor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureBenchmark {
    pub national_average: f64,
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub direction: MeasureDirection,
}

impl MeasureBenchmark {
    pub fn tier(&self, observed: f64) -> BenchmarkTier {
        let observed = if observed.is_finite() {
            observed.clamp(0.0, 100.0)
        } else {
            return BenchmarkTier::Poor;
        };
        let meets = |boundary: f64| match self.direction {
            MeasureDirection::HigherIsWorse => observed <= boundary,
            MeasureDirection::HigherIsBetter => observed >= boundary,
        };
        if meets(self.excellent) {
            BenchmarkTier::Excellent
        } else if meets(self.good) {
            BenchmarkTier::Good
        } else if meets(self.average) {
            BenchmarkTier::Average
        } else {
            BenchmarkTier::Poor
        }
    }
}

/// Point value assigned to each scope/severity letter on the survey grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeficiencyPointMatrix {
    points: BTreeMap<SeverityLetter, u32>,
}

impl DeficiencyPointMatrix {
    /// Requires an entry for every letter A-L.
    pub fn new(points: BTreeMap<SeverityLetter, u32>) -> Result<Self, EngineError> {
        for letter in SeverityLetter::ALL {
            if !points.contains_key(&letter) {
                return Err(EngineError::IncompletePointMatrix { letter });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self, letter: SeverityLetter) -> u32 {
        self.points.get(&letter).copied().unwrap_or(0)
    }
}

/// Diagnosis grouping used as a categorical covariate in the GG regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisCategory {
    Stroke,
    HipFracture,
    JointReplacement,
    Cardiac,
    Pulmonary,
    OtherMedical,
}

/// Named coefficients for the expected-discharge-function-score regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GgRegressionModel {
    pub intercept: f64,
    pub admission_score_coeff: f64,
    pub age_coeff: f64,
    pub bims_coeff: f64,
    pub comorbidity_coeff: f64,
    pub length_of_stay_coeff: f64,
    pub diagnosis_offsets: BTreeMap<DiagnosisCategory, f64>,
}

/// All static lookup data the engine consults, passed in at construction so
/// a methodology update is a new table set, not a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTables {
    pub staffing: StaffingBreakpoints,
    pub quality: BTreeMap<MeasureCode, MeasureBenchmark>,
    pub inspection: DeficiencyPointMatrix,
    pub gg: GgRegressionModel,
}

impl ThresholdTables {
    /// Tables matching the published CMS technical users' guide figures.
    pub fn standard() -> Self {
        Self {
            staffing: StaffingBreakpoints {
                total_nurse: StarBreakpoints::from_descending(4.09, 3.68, 3.35, 3.00),
                rn: StarBreakpoints::from_descending(0.75, 0.66, 0.55, 0.48),
            },
            quality: standard_quality_benchmarks(),
            inspection: DeficiencyPointMatrix {
                points: standard_point_matrix(),
            },
            gg: standard_gg_model(),
        }
    }

    pub fn benchmark(&self, code: MeasureCode) -> Option<&MeasureBenchmark> {
        self.quality.get(&code)
    }
}

fn standard_quality_benchmarks() -> BTreeMap<MeasureCode, MeasureBenchmark> {
    let worse = |national: f64, excellent: f64, good: f64| MeasureBenchmark {
        national_average: national,
        excellent,
        good,
        average: national,
        direction: MeasureDirection::HigherIsWorse,
    };
    BTreeMap::from([
        (
            MeasureCode::LongStayAntipsychotic,
            worse(15.0, 10.0, 13.0),
        ),
        (MeasureCode::LongStayPressureUlcers, worse(7.5, 4.0, 6.0)),
        (
            MeasureCode::LongStayFallsMajorInjury,
            worse(3.5, 1.5, 2.5),
        ),
        (MeasureCode::LongStayCatheter, worse(1.9, 1.0, 1.5)),
        (MeasureCode::LongStayUti, worse(2.8, 1.5, 2.2)),
        (
            MeasureCode::ShortStayRehospitalization,
            worse(22.0, 16.0, 19.0),
        ),
        (
            MeasureCode::FluVaccination,
            MeasureBenchmark {
                national_average: 90.0,
                excellent: 97.0,
                good: 94.0,
                average: 90.0,
                direction: MeasureDirection::HigherIsBetter,
            },
        ),
    ])
}

fn standard_point_matrix() -> BTreeMap<SeverityLetter, u32> {
    BTreeMap::from([
        (SeverityLetter::A, 0),
        (SeverityLetter::B, 0),
        (SeverityLetter::C, 0),
        (SeverityLetter::D, 4),
        (SeverityLetter::E, 8),
        (SeverityLetter::F, 16),
        (SeverityLetter::G, 20),
        (SeverityLetter::H, 35),
        (SeverityLetter::I, 45),
        (SeverityLetter::J, 50),
        (SeverityLetter::K, 100),
        (SeverityLetter::L, 150),
    ])
}

fn standard_gg_model() -> GgRegressionModel {
    GgRegressionModel {
        intercept: 14.0,
        admission_score_coeff: 0.72,
        age_coeff: -0.12,
        bims_coeff: 0.45,
        comorbidity_coeff: -1.3,
        length_of_stay_coeff: 0.05,
        diagnosis_offsets: BTreeMap::from([
            (DiagnosisCategory::Stroke, -6.5),
            (DiagnosisCategory::HipFracture, -3.0),
            (DiagnosisCategory::JointReplacement, 2.5),
            (DiagnosisCategory::Cardiac, 0.5),
            (DiagnosisCategory::Pulmonary, -1.0),
            (DiagnosisCategory::OtherMedical, 0.0),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_reject_missing_level() {
        let result = StarBreakpoints::new([(5, 4.0), (4, 3.5), (3, 3.2), (6, 2.9)]);
        assert_eq!(result, Err(EngineError::MissingBreakpoint { level: 2 }));
    }

    #[test]
    fn breakpoints_reject_non_descending_values() {
        let result = StarBreakpoints::new([(5, 3.0), (4, 3.5), (3, 3.2), (2, 2.9)]);
        assert_eq!(result, Err(EngineError::NonDescendingBreakpoints));
    }

    #[test]
    fn point_matrix_requires_all_twelve_letters() {
        let mut points = standard_point_matrix();
        points.remove(&SeverityLetter::K);
        let result = DeficiencyPointMatrix::new(points);
        assert_eq!(
            result,
            Err(EngineError::IncompletePointMatrix {
                letter: SeverityLetter::K
            })
        );
    }

    #[test]
    fn standard_point_matrix_is_monotone_in_severity_and_scope() {
        let matrix = ThresholdTables::standard().inspection;
        let mut previous = 0;
        for letter in SeverityLetter::ALL {
            let points = matrix.points(letter);
            assert!(
                points >= previous,
                "points must not decrease from {previous} at {letter:?}"
            );
            previous = points;
        }
    }

    #[test]
    fn tier_respects_higher_is_worse_direction() {
        let benchmark = MeasureBenchmark {
            national_average: 15.0,
            excellent: 10.0,
            good: 13.0,
            average: 15.0,
            direction: MeasureDirection::HigherIsWorse,
        };
        assert_eq!(benchmark.tier(9.0), BenchmarkTier::Excellent);
        assert_eq!(benchmark.tier(10.0), BenchmarkTier::Excellent);
        assert_eq!(benchmark.tier(13.0), BenchmarkTier::Good);
        assert_eq!(benchmark.tier(15.0), BenchmarkTier::Average);
        assert_eq!(benchmark.tier(22.0), BenchmarkTier::Poor);
    }

    #[test]
    fn tier_respects_higher_is_better_direction() {
        let tables = ThresholdTables::standard();
        let flu = tables.benchmark(MeasureCode::FluVaccination).unwrap();
        assert_eq!(flu.tier(98.0), BenchmarkTier::Excellent);
        assert_eq!(flu.tier(94.0), BenchmarkTier::Good);
        assert_eq!(flu.tier(90.0), BenchmarkTier::Average);
        assert_eq!(flu.tier(82.0), BenchmarkTier::Poor);
    }

    #[test]
    fn tier_clamps_out_of_range_percentages() {
        let tables = ThresholdTables::standard();
        let flu = tables.benchmark(MeasureCode::FluVaccination).unwrap();
        assert_eq!(flu.tier(140.0), BenchmarkTier::Excellent);
        assert_eq!(flu.tier(-5.0), BenchmarkTier::Poor);
        assert_eq!(flu.tier(f64::NAN), BenchmarkTier::Poor);
    }
}
