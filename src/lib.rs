//! Rating and recommendation engine for CMS Five-Star nursing facility data.
//!
//! The crate reproduces the Five-Star scoring methodology (health-inspection
//! points, staffing HPRD star levels, quality-measure benchmark tiers, the
//! GG discharge-function regression) and turns a facility's raw metrics into
//! a ranked list of improvement recommendations with estimated star impact,
//! cost tier, and timeframe.
//!
//! The engine is a pure, deterministic function of its inputs: no I/O, no
//! clocks, no shared mutable state. The surrounding dashboard owns routing,
//! persistence, and rendering; it hands plain records in and gets plain
//! records back.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod scoring;
pub mod thresholds;

pub use analysis::{AnalysisEngine, ProjectedRatings, StarGap};
pub use config::EngineConfig;
pub use domain::Recommendation;
pub use error::EngineError;
pub use thresholds::ThresholdTables;
