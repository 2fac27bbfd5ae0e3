use std::collections::HashMap;

use super::{default_priority, steps};
use crate::domain::{
    CostTier, DeficiencyRecord, DomainCategory, Facility, HealthInspectionRecord, Priority,
    Recommendation, Timeframe,
};

const DEFICIENCY_COUNT_IMPACT: f64 = 1.0;
const SEVERE_DEFICIENCY_IMPACT: f64 = 1.5;
const REPEAT_CATEGORY_IMPACT: f64 = 0.75;
const FINE_IMPACT: f64 = 0.5;

pub(crate) fn evaluate(
    facility: &Facility,
    inspections: &[HealthInspectionRecord],
    citations: &[DeficiencyRecord],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let rating = facility.ratings.health_inspection;
    // Special-focus and abuse-flagged facilities sit under heightened CMS
    // scrutiny, so survey findings escalate even at a middling rating.
    let priority = if facility.special_focus || facility.abuse_flag {
        Priority::High
    } else {
        default_priority(rating)
    };

    // The most recent survey is the operative one.
    if let Some(survey) = inspections.first() {
        let total = survey.total_deficiencies();
        if f64::from(total) > survey.national_avg_deficiencies {
            recommendations.push(Recommendation {
                id: "inspection-deficiency-count".to_string(),
                category: DomainCategory::HealthInspection,
                priority,
                title: "Bring survey deficiency count under the national average".to_string(),
                description: format!(
                    "The most recent survey cited {} deficiencies against a national \
                     average of {:.1}.",
                    total, survey.national_avg_deficiencies
                ),
                current_value: f64::from(total),
                target_value: survey.national_avg_deficiencies,
                estimated_impact: DEFICIENCY_COUNT_IMPACT,
                estimated_cost: CostTier::Medium,
                timeframe: Timeframe::LongTerm,
                action_steps: steps(&[
                    "Run a mock survey against the most recent statement of deficiencies.",
                    "Assign each open F-tag a corrective-action owner and a closure date.",
                ]),
            });
        }

        let severe = survey.severe_deficiencies();
        if severe > 0 {
            recommendations.push(Recommendation {
                id: "inspection-severe-deficiency".to_string(),
                category: DomainCategory::HealthInspection,
                // Actual harm or immediate jeopardy is urgent at any rating.
                priority: Priority::High,
                title: "Resolve actual-harm and immediate-jeopardy citations".to_string(),
                description: format!(
                    "The most recent survey includes {} severity G-L citation(s); these \
                     carry the heaviest point penalties and can trigger enforcement.",
                    severe
                ),
                current_value: f64::from(severe),
                target_value: 0.0,
                estimated_impact: SEVERE_DEFICIENCY_IMPACT,
                estimated_cost: CostTier::High,
                timeframe: Timeframe::Immediate,
                action_steps: steps(&[
                    "Verify the plan of correction for every G-L citation is fully implemented.",
                    "Audit the affected care processes daily until the revisit clears them.",
                ]),
            });
        }

        if survey.fine_amount_cents > 0 {
            recommendations.push(Recommendation {
                id: "inspection-fine".to_string(),
                category: DomainCategory::HealthInspection,
                priority: Priority::High,
                title: "Address the conditions behind the civil money penalty".to_string(),
                description: format!(
                    "A civil money penalty of ${:.2} is attached to the most recent survey.",
                    survey.fine_amount_cents as f64 / 100.0
                ),
                current_value: survey.fine_amount_cents as f64 / 100.0,
                target_value: 0.0,
                estimated_impact: FINE_IMPACT,
                estimated_cost: CostTier::Low,
                timeframe: Timeframe::Immediate,
                action_steps: steps(&[
                    "Confirm the penalty's root-cause citations are corrected and documented.",
                    "Brief ownership on enforcement status before the next certification cycle.",
                ]),
            });
        }
    }

    if let Some((category, count)) = most_repeated_category(citations) {
        recommendations.push(Recommendation {
            id: "inspection-repeat-category".to_string(),
            category: DomainCategory::HealthInspection,
            priority,
            title: format!("Break the repeat citation pattern in {category}"),
            description: format!(
                "{category} has been cited {count} times in the current citation set, \
                 which surveyors read as a systemic failure.",
            ),
            current_value: f64::from(count),
            target_value: 0.0,
            estimated_impact: REPEAT_CATEGORY_IMPACT,
            estimated_cost: CostTier::Medium,
            timeframe: Timeframe::ShortTerm,
            action_steps: steps(&[
                "Perform a root-cause analysis across every citation in the category.",
                "Fold the category into the QAPI committee's standing audit schedule.",
            ]),
        });
    }

    recommendations
}

/// Category cited at least twice, with ties broken by whichever category was
/// encountered first in the citation set.
fn most_repeated_category(citations: &[DeficiencyRecord]) -> Option<(String, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for citation in citations {
        *counts.entry(citation.category.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, u32)> = None;
    for citation in citations {
        let count = counts[citation.category.as_str()];
        if count < 2 {
            continue;
        }
        match best {
            Some((_, existing_count)) if count <= existing_count => {}
            _ => best = Some((citation.category.as_str(), count)),
        }
    }

    best.map(|(category, count)| (category.to_string(), count))
}
