use std::cmp::Ordering;

use crate::domain::Recommendation;

/// Orders recommendations for presentation: priority first, then estimated
/// impact descending, then cost ascending. `sort_by` is stable, so ties on
/// all three keys keep their generation order.
pub fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| {
                b.estimated_impact
                    .partial_cmp(&a.estimated_impact)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.estimated_cost.cmp(&b.estimated_cost))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CostTier, DomainCategory, Priority, Timeframe};

    fn rec(id: &str, priority: Priority, impact: f64, cost: CostTier) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            category: DomainCategory::Staffing,
            priority,
            title: String::new(),
            description: String::new(),
            current_value: 0.0,
            target_value: 0.0,
            estimated_impact: impact,
            estimated_cost: cost,
            timeframe: Timeframe::ShortTerm,
            action_steps: Vec::new(),
        }
    }

    fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|rec| rec.id.as_str()).collect()
    }

    #[test]
    fn priority_outranks_impact_and_cost() {
        let mut list = vec![
            rec("medium-big", Priority::Medium, 2.0, CostTier::Low),
            rec("high-small", Priority::High, 0.25, CostTier::High),
        ];
        rank(&mut list);
        assert_eq!(ids(&list), vec!["high-small", "medium-big"]);
    }

    #[test]
    fn impact_breaks_priority_ties_descending() {
        let mut list = vec![
            rec("a", Priority::High, 0.5, CostTier::Low),
            rec("b", Priority::High, 1.5, CostTier::High),
        ];
        rank(&mut list);
        assert_eq!(ids(&list), vec!["b", "a"]);
    }

    #[test]
    fn cost_breaks_impact_ties_ascending() {
        let mut list = vec![
            rec("pricey", Priority::Medium, 1.0, CostTier::High),
            rec("cheap", Priority::Medium, 1.0, CostTier::Low),
        ];
        rank(&mut list);
        assert_eq!(ids(&list), vec!["cheap", "pricey"]);
    }

    #[test]
    fn full_ties_keep_generation_order() {
        let mut list = vec![
            rec("first", Priority::Low, 0.5, CostTier::Medium),
            rec("second", Priority::Low, 0.5, CostTier::Medium),
            rec("third", Priority::Low, 0.5, CostTier::Medium),
        ];
        rank(&mut list);
        assert_eq!(ids(&list), vec!["first", "second", "third"]);
    }
}
