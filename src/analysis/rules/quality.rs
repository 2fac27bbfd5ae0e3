use super::{default_priority, steps};
use crate::domain::{
    CostTier, DomainCategory, Facility, MeasureCode, QualityMeasureSet, Recommendation, Timeframe,
};
use crate::scoring::benchmark_tier;
use crate::thresholds::{BenchmarkTier, MeasureDirection, ThresholdTables};

struct MeasureRule {
    code: MeasureCode,
    id: &'static str,
    title: &'static str,
    impact: f64,
    cost: CostTier,
    timeframe: Timeframe,
    action_steps: &'static [&'static str],
}

/// One entry per tracked measure, in presentation order.
fn tracked_measures() -> Vec<MeasureRule> {
    vec![
        MeasureRule {
            code: MeasureCode::LongStayAntipsychotic,
            id: "qm-antipsychotic",
            title: "Reduce antipsychotic medication use",
            impact: 0.5,
            cost: CostTier::Low,
            timeframe: Timeframe::ShortTerm,
            action_steps: &[
                "Schedule gradual dose reduction reviews with the consultant pharmacist.",
                "Document behavioral interventions attempted before each new order.",
            ],
        },
        MeasureRule {
            code: MeasureCode::LongStayPressureUlcers,
            id: "qm-pressure-ulcers",
            title: "Reduce pressure ulcer incidence",
            impact: 0.5,
            cost: CostTier::Medium,
            timeframe: Timeframe::ShortTerm,
            action_steps: &[
                "Audit repositioning compliance on high-risk units weekly.",
                "Standardize skin assessment on admission and at every care conference.",
            ],
        },
        MeasureRule {
            code: MeasureCode::LongStayFallsMajorInjury,
            id: "qm-falls",
            title: "Reduce falls with major injury",
            impact: 0.5,
            cost: CostTier::Medium,
            timeframe: Timeframe::ShortTerm,
            action_steps: &[
                "Complete post-fall huddles within twenty-four hours of every event.",
                "Review psychotropic and diuretic orders for residents with repeat falls.",
            ],
        },
        MeasureRule {
            code: MeasureCode::LongStayCatheter,
            id: "qm-catheter",
            title: "Reduce indwelling catheter use",
            impact: 0.25,
            cost: CostTier::Low,
            timeframe: Timeframe::ShortTerm,
            action_steps: &[
                "Require a documented medical indication at each catheter review.",
                "Trial scheduled toileting before continuing any catheter order.",
            ],
        },
        MeasureRule {
            code: MeasureCode::ShortStayRehospitalization,
            id: "qm-rehospitalization",
            title: "Reduce short-stay rehospitalizations",
            impact: 0.5,
            cost: CostTier::High,
            timeframe: Timeframe::LongTerm,
            action_steps: &[
                "Adopt a change-in-condition escalation tool on every unit.",
                "Arrange practitioner follow-up within seventy-two hours of admission.",
            ],
        },
        MeasureRule {
            code: MeasureCode::FluVaccination,
            id: "qm-flu-vaccine",
            title: "Raise influenza vaccination coverage",
            impact: 0.25,
            cost: CostTier::Low,
            timeframe: Timeframe::ShortTerm,
            action_steps: &[
                "Offer vaccination at admission with standing orders.",
                "Track declinations and re-offer during care conferences.",
            ],
        },
    ]
}

pub(crate) fn evaluate(
    facility: &Facility,
    measures: &QualityMeasureSet,
    tables: &ThresholdTables,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let priority = default_priority(facility.ratings.quality_measures);

    for rule in tracked_measures() {
        let observed = measures.value(rule.code);
        if benchmark_tier(rule.code, observed, tables) != BenchmarkTier::Poor {
            continue;
        }
        let Some(benchmark) = tables.benchmark(rule.code) else {
            // No benchmark entry: the tier sentinel fired, but there is no
            // target to phrase a recommendation around.
            continue;
        };
        let comparison = match benchmark.direction {
            MeasureDirection::HigherIsWorse => "above",
            MeasureDirection::HigherIsBetter => "below",
        };
        recommendations.push(Recommendation {
            id: rule.id.to_string(),
            category: DomainCategory::QualityMeasures,
            priority,
            title: rule.title.to_string(),
            description: format!(
                "{} is at {:.1}%, {} the {:.1}% benchmark.",
                rule.title, observed, comparison, benchmark.average
            ),
            current_value: observed,
            target_value: benchmark.average,
            estimated_impact: rule.impact,
            estimated_cost: rule.cost,
            timeframe: rule.timeframe,
            action_steps: steps(rule.action_steps),
        });
    }

    recommendations
}
