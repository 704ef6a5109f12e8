//! File I/O error types.

/// Kinds of file I/O failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IoErrorKind {
    /// Failed to read an input file
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// Path that was read
        path: String,
        /// Underlying OS error
        message: String,
    },
    /// Failed to write an output file
    #[display("Failed to write {}: {}", path, message)]
    FileWrite {
        /// Path that was written
        path: String,
        /// Underlying OS error
        message: String,
    },
}

/// File I/O error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{IoError, IoErrorKind};
///
/// let err = IoError::new(IoErrorKind::FileRead {
///     path: "draft.txt".to_string(),
///     message: "No such file or directory".to_string(),
/// });
/// assert!(format!("{}", err).contains("draft.txt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} at line {} in {}", kind, line, file)]
pub struct IoError {
    /// The kind of error that occurred
    pub kind: IoErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IoError {
    /// Create a new I/O error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
