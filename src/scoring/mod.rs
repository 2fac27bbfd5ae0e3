//! Pure per-domain scoring functions.
//!
//! Each maps a metric (or set of metrics) to a star level, point value, or
//! expected score. Out-of-domain inputs resolve to documented sentinels so
//! partial facility data never crashes a dashboard render; only a malformed
//! threshold table surfaces as an error.

mod function;
mod inspection;
mod quality;
mod staffing;

pub use function::{
    expected_discharge_score, observed_discharge_score, DischargeFunctionScores, GgAssessment,
    GgItemPair, GgResponse, GG_ITEM_COUNT, GG_SCORE_MAX,
};
pub use inspection::survey_points;
pub use quality::benchmark_tier;
pub use staffing::staffing_star_level;
