use super::{default_priority, steps};
use crate::analysis::gap::next_star_gap;
use crate::config::EngineConfig;
use crate::domain::{CostTier, DomainCategory, Facility, Recommendation, StaffingMetrics, Timeframe};
use crate::error::EngineError;
use crate::thresholds::ThresholdTables;

const TOTAL_HPRD_IMPACT: f64 = 1.0;
const RN_HPRD_IMPACT: f64 = 0.75;
const WEEKEND_RATIO_IMPACT: f64 = 0.5;
const RN_TURNOVER_IMPACT: f64 = 0.5;
const TOTAL_TURNOVER_IMPACT: f64 = 0.5;

pub(crate) fn evaluate(
    facility: &Facility,
    staffing: &StaffingMetrics,
    tables: &ThresholdTables,
    config: &EngineConfig,
) -> Result<Vec<Recommendation>, EngineError> {
    let mut recommendations = Vec::new();
    let rating = facility.ratings.staffing;
    let priority = default_priority(rating);

    if let Some(gap) = next_star_gap(staffing.total_nurse_hprd, &tables.staffing.total_nurse)? {
        recommendations.push(Recommendation {
            id: "staffing-total-hprd".to_string(),
            category: DomainCategory::Staffing,
            priority,
            title: "Increase total nurse staffing hours".to_string(),
            description: format!(
                "Total nurse staffing is {:.2} HPRD; reaching {:.2} HPRD earns the \
                 {}-star staffing level.",
                staffing.total_nurse_hprd, gap.threshold, gap.target_star_level
            ),
            current_value: staffing.total_nurse_hprd,
            target_value: gap.threshold,
            estimated_impact: TOTAL_HPRD_IMPACT,
            estimated_cost: cost_from_daily_hours(gap.gap * f64::from(facility.resident_count)),
            timeframe: Timeframe::ShortTerm,
            action_steps: steps(&[
                "Review PBJ submissions for unreported contract and agency hours.",
                "Add licensed-nurse shifts on the days census peaks.",
                "Rebalance CNA assignments so direct-care hours reach the floor daily.",
            ]),
        });
    }

    if let Some(gap) = next_star_gap(staffing.rn_hprd, &tables.staffing.rn)? {
        recommendations.push(Recommendation {
            id: "staffing-rn-hprd".to_string(),
            category: DomainCategory::Staffing,
            priority,
            title: "Increase RN coverage".to_string(),
            description: format!(
                "RN staffing is {:.2} HPRD; reaching {:.2} HPRD earns the {}-star RN level.",
                staffing.rn_hprd, gap.threshold, gap.target_star_level
            ),
            current_value: staffing.rn_hprd,
            target_value: gap.threshold,
            estimated_impact: RN_HPRD_IMPACT,
            estimated_cost: cost_from_daily_hours(gap.gap * f64::from(facility.resident_count)),
            timeframe: Timeframe::ShortTerm,
            action_steps: steps(&[
                "Recruit for open RN positions with shift differentials.",
                "Extend RN coverage to evenings before adding day-shift hours.",
                "Cross-train charge nurses so RN hours count on every unit.",
            ]),
        });
    }

    if staffing.total_nurse_hprd > 0.0 {
        let weekend_ratio = staffing.weekend_total_hprd / staffing.total_nurse_hprd;
        if weekend_ratio < config.weekend_ratio_floor {
            let target = config.weekend_ratio_floor * staffing.total_nurse_hprd;
            recommendations.push(Recommendation {
                id: "staffing-weekend-ratio".to_string(),
                category: DomainCategory::Staffing,
                priority,
                title: "Close the weekend staffing drop".to_string(),
                description: format!(
                    "Weekend staffing is {:.2} HPRD, {:.0}% of the weekday level; schedule \
                     at least {:.2} HPRD on weekends.",
                    staffing.weekend_total_hprd,
                    weekend_ratio * 100.0,
                    target
                ),
                current_value: staffing.weekend_total_hprd,
                target_value: target,
                estimated_impact: WEEKEND_RATIO_IMPACT,
                estimated_cost: CostTier::Low,
                timeframe: Timeframe::Immediate,
                action_steps: steps(&[
                    "Move to a rotating weekend schedule with guaranteed minimums.",
                    "Offer weekend incentive pay before backfilling with agency staff.",
                ]),
            });
        }
    }

    if staffing.rn_turnover_pct > config.rn_turnover_ceiling_pct {
        recommendations.push(Recommendation {
            id: "staffing-rn-turnover".to_string(),
            category: DomainCategory::Staffing,
            priority,
            title: "Reduce RN turnover".to_string(),
            description: format!(
                "RN turnover of {:.0}% exceeds the {:.0}% ceiling; instability here \
                 depresses both staffing and survey performance.",
                staffing.rn_turnover_pct, config.rn_turnover_ceiling_pct
            ),
            current_value: staffing.rn_turnover_pct,
            target_value: config.rn_turnover_ceiling_pct,
            estimated_impact: RN_TURNOVER_IMPACT,
            estimated_cost: CostTier::Medium,
            timeframe: Timeframe::LongTerm,
            action_steps: steps(&[
                "Run stay interviews with RNs inside their first ninety days.",
                "Benchmark RN wages against the local hospital market.",
                "Assign a preceptor to every newly hired RN.",
            ]),
        });
    }

    if staffing.total_turnover_pct > config.total_turnover_ceiling_pct {
        recommendations.push(Recommendation {
            id: "staffing-total-turnover".to_string(),
            category: DomainCategory::Staffing,
            priority,
            title: "Reduce overall nursing turnover".to_string(),
            description: format!(
                "Total nursing turnover of {:.0}% exceeds the {:.0}% ceiling.",
                staffing.total_turnover_pct, config.total_turnover_ceiling_pct
            ),
            current_value: staffing.total_turnover_pct,
            target_value: config.total_turnover_ceiling_pct,
            estimated_impact: TOTAL_TURNOVER_IMPACT,
            estimated_cost: CostTier::Medium,
            timeframe: Timeframe::LongTerm,
            action_steps: steps(&[
                "Standardize onboarding and mentorship for CNAs.",
                "Publish schedules four weeks out to cut no-notice resignations.",
            ]),
        });
    }

    Ok(recommendations)
}

/// Cost tier from the additional daily nurse-hours the gap represents.
fn cost_from_daily_hours(additional_daily_hours: f64) -> CostTier {
    if additional_daily_hours <= 4.0 {
        CostTier::Low
    } else if additional_daily_hours <= 12.0 {
        CostTier::Medium
    } else {
        CostTier::High
    }
}
