use crate::error::EngineError;
use crate::thresholds::StarBreakpoints;

/// Resolves an HPRD value to a star level by walking the table from 5 down
/// to 2; the first breakpoint the value meets or exceeds wins, otherwise the
/// level is 1. Negative or non-finite input is treated as level 1.
pub fn staffing_star_level(value: f64, table: &StarBreakpoints) -> Result<u8, EngineError> {
    if !value.is_finite() || value < 0.0 {
        return Ok(1);
    }
    for level in (2..=5u8).rev() {
        if value >= table.breakpoint(level)? {
            return Ok(level);
        }
    }
    Ok(1)
}
