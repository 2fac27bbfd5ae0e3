use crate::domain::SeverityLetter;

/// Faults that indicate a malformed rule table rather than bad facility data.
///
/// Bad *input* (negative HPRD, unknown measure, missing data slice) never
/// surfaces here; scoring functions resolve those to documented sentinels so a
/// dashboard request can always render something.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("star breakpoint table has no entry for level {level}")]
    MissingBreakpoint { level: u8 },
    #[error("star breakpoints must descend strictly from level 5 to level 2")]
    NonDescendingBreakpoints,
    #[error("deficiency point matrix is missing severity letter {letter:?}")]
    IncompletePointMatrix { letter: SeverityLetter },
}
