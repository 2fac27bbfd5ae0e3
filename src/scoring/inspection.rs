use std::collections::HashMap;

use crate::domain::DeficiencyRecord;
use crate::thresholds::DeficiencyPointMatrix;

/// Total health-inspection points for one survey's citation set.
///
/// Each citation contributes the matrix value for its scope/severity letter;
/// when any tag is cited more than once in the set the configured repeat
/// multiplier is applied to the total.
pub fn survey_points(
    citations: &[DeficiencyRecord],
    matrix: &DeficiencyPointMatrix,
    repeat_multiplier: f64,
) -> f64 {
    let base: u32 = citations
        .iter()
        .map(|citation| matrix.points(citation.scope_severity))
        .sum();

    let mut tag_counts: HashMap<&str, u32> = HashMap::new();
    for citation in citations {
        *tag_counts.entry(citation.tag.as_str()).or_default() += 1;
    }
    let has_repeat = tag_counts.values().any(|count| *count > 1);

    if has_repeat && repeat_multiplier > 1.0 {
        base as f64 * repeat_multiplier
    } else {
        base as f64
    }
}
