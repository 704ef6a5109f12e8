//! Fallback-ladder exhaustion errors.

/// Every model in the fallback ladder exhausted its attempt budget.
///
/// Carries the last underlying failure so callers can see why the final
/// attempt failed.
///
/// # Examples
///
/// ```
/// use scriptoria_error::GenerationError;
///
/// let err = GenerationError::new(
///     vec!["primary".to_string(), "backup".to_string()],
///     4,
///     "Rate limited: quota exceeded",
/// );
/// assert_eq!(err.attempts, 4);
/// assert!(format!("{}", err).contains("quota exceeded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Generation Error: all {} model(s) failed after {} attempt(s), last error: {} at line {} in {}",
    models.len(),
    attempts,
    last_error,
    line,
    file
)]
pub struct GenerationError {
    /// Models tried, in ladder order
    pub models: Vec<String>,
    /// Total backend calls made across all models
    pub attempts: u32,
    /// Rendered message of the last underlying failure
    pub last_error: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current location.
    #[track_caller]
    pub fn new(models: Vec<String>, attempts: u32, last_error: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            models,
            attempts,
            last_error: last_error.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
