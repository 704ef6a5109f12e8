//! Errors for model output that cannot be turned into structured data.

/// Why a completion could not be used as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutputErrorKind {
    /// Extraction and repair could not produce parseable JSON
    #[display("Malformed output: {} (preview: {})", message, preview)]
    MalformedOutput {
        /// Diagnostic from the first (pre comment-stripping) parse attempt
        message: String,
        /// Leading characters of the candidate text
        preview: String,
    },
    /// Valid JSON that matches neither the expected shape nor any recovery heuristic
    #[display("Unexpected shape: expected {}, found {}", expected, found)]
    UnexpectedShape {
        /// Shape the stage asked for
        expected: String,
        /// Description of what was actually parsed
        found: String,
    },
}

/// Output error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{OutputError, OutputErrorKind};
///
/// let err = OutputError::new(OutputErrorKind::UnexpectedShape {
///     expected: "record list".to_string(),
///     found: "string".to_string(),
/// });
/// assert!(format!("{}", err).contains("record list"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at line {} in {}", kind, line, file)]
pub struct OutputError {
    /// The specific error condition
    pub kind: OutputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl OutputError {
    /// Create a new OutputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OutputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
