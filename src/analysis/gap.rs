use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::scoring::staffing_star_level;
use crate::thresholds::StarBreakpoints;

/// Distance from a metric to the next unearned star level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarGap {
    pub gap: f64,
    pub threshold: f64,
    pub target_star_level: u8,
}

/// Computes the arithmetic distance to the next star level's breakpoint.
///
/// Returns `None` at level 5 (including values strictly above the 5-star
/// breakpoint); a gap is only meaningful moving toward a higher unearned
/// level.
pub fn next_star_gap(
    current: f64,
    table: &StarBreakpoints,
) -> Result<Option<StarGap>, EngineError> {
    let current = if current.is_finite() {
        current.max(0.0)
    } else {
        0.0
    };
    let level = staffing_star_level(current, table)?;
    if level >= 5 {
        return Ok(None);
    }
    let target = level + 1;
    let threshold = table.breakpoint(target)?;
    Ok(Some(StarGap {
        gap: threshold - current,
        threshold,
        target_star_level: target,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::ThresholdTables;

    fn total_table() -> StarBreakpoints {
        ThresholdTables::standard().staffing.total_nurse
    }

    #[test]
    fn reports_distance_to_the_next_level() {
        let gap = next_star_gap(3.00, &total_table())
            .expect("valid table")
            .expect("level 2 has headroom");
        assert_eq!(gap.target_star_level, 3);
        assert_eq!(gap.threshold, 3.35);
        assert!((gap.gap - 0.35).abs() < 1e-9);
    }

    #[test]
    fn level_five_has_no_gap() {
        assert_eq!(next_star_gap(4.09, &total_table()), Ok(None));
        assert_eq!(next_star_gap(9.0, &total_table()), Ok(None));
    }

    #[test]
    fn level_one_targets_the_level_two_breakpoint() {
        let gap = next_star_gap(0.40, &ThresholdTables::standard().staffing.rn)
            .expect("valid table")
            .expect("level 1 has headroom");
        assert_eq!(gap.target_star_level, 2);
        assert_eq!(gap.threshold, 0.48);
    }

    #[test]
    fn negative_input_measures_from_zero() {
        let gap = next_star_gap(-1.0, &total_table())
            .expect("valid table")
            .expect("gap exists");
        assert_eq!(gap.threshold, 3.00);
        assert_eq!(gap.gap, 3.00);
    }
}
