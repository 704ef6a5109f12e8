//! Stage input error types.

/// Specific error conditions for pipeline stage inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NarrativeErrorKind {
    /// A stage received prior-stage data of the wrong shape
    #[display("Stage '{}' received invalid upstream data: expected {}, found {}", stage, expected, found)]
    InvalidUpstreamData {
        /// Stage that rejected the input
        stage: String,
        /// Shape the stage needs
        expected: String,
        /// Shape it was given
        found: String,
    },
    /// A stage's direct input (premise, script) is unusable
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),
    /// The whole-run deadline elapsed
    #[display("Pipeline deadline of {:?} exceeded", _0)]
    DeadlineExceeded(std::time::Duration),
}

/// Error type for stage input checks.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{NarrativeError, NarrativeErrorKind};
///
/// let err = NarrativeError::new(NarrativeErrorKind::InvalidInput(
///     "premise is empty".to_string(),
/// ));
/// assert!(format!("{}", err).contains("premise is empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narrative Error: {} at line {} in {}", kind, line, file)]
pub struct NarrativeError {
    /// The specific error condition
    pub kind: NarrativeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrativeError {
    /// Create a new NarrativeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
