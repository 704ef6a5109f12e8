//! Completion backend error types.

/// Failure conditions reported by a completion backend for one call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// The provider throttled the request (HTTP 429, quota or capacity exhausted)
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Network-level failure before a response arrived
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The request timed out
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// The provider answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },
    /// The provider's response envelope could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// The provider returned no completion text
    #[display("Completion contained no text")]
    EmptyCompletion,
}

impl BackendErrorKind {
    /// Whether the provider itself flagged this failure as throttling.
    ///
    /// Message-based detection lives in `scriptoria_rate_limit`; this only
    /// covers the structured signals.
    pub fn is_rate_limit(&self) -> bool {
        match self {
            BackendErrorKind::RateLimited(_) => true,
            BackendErrorKind::Api { status, .. } => *status == 429,
            _ => false,
        }
    }
}

/// Backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Api {
///     status: 429,
///     message: "slow down".to_string(),
/// });
/// assert!(err.kind.is_rate_limit());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
