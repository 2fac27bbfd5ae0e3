//! Per-domain rule checks.
//!
//! Each domain evaluates a fixed ordered set of independent checks; every
//! check that fires emits exactly one recommendation. Checks never consult
//! recommendations already generated.

pub(crate) mod inspection;
pub(crate) mod quality;
pub(crate) mod staffing;

use crate::domain::Priority;

/// Default priority: facilities already at 1-2 stars in a domain get `High`,
/// everyone else `Medium`. Individual checks may override this upward.
pub(crate) fn default_priority(domain_rating: u8) -> Priority {
    if domain_rating <= 2 {
        Priority::High
    } else {
        Priority::Medium
    }
}

pub(crate) fn steps(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|step| step.to_string()).collect()
}
