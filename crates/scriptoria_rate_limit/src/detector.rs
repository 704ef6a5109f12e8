//! Classification of backend failures into rate limiting vs other faults.

use scriptoria_error::{ScriptoriaError, ScriptoriaErrorKind};
use std::sync::LazyLock;

static RATE_LIMIT_SIGNAL: LazyLock<Option<regex::Regex>> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)rate[ _-]?limit|too many requests|quota|capacity").ok()
});

/// How the fallback ladder should react to a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorClass {
    /// Throughput throttling: abandon the current model
    RateLimited,
    /// Anything else: retry the same model
    Transient,
}

/// Whether a message carries a rate-limit signal.
///
/// # Examples
///
/// ```
/// use scriptoria_rate_limit::is_rate_limit_message;
///
/// assert!(is_rate_limit_message("Rate limit reached for model"));
/// assert!(is_rate_limit_message("429 Too Many Requests"));
/// assert!(!is_rate_limit_message("connection reset by peer"));
/// ```
pub fn is_rate_limit_message(message: &str) -> bool {
    RATE_LIMIT_SIGNAL
        .as_ref()
        .is_some_and(|signal| signal.is_match(message))
}

/// Classify a failed completion attempt.
///
/// Structured signals win (`RateLimited`, HTTP 429); otherwise the backend's
/// message is searched for throttling vocabulary. Failures that did not come
/// from the backend are never rate limits.
pub fn classify_error(error: &ScriptoriaError) -> ErrorClass {
    match error.root_cause().kind() {
        ScriptoriaErrorKind::Backend(backend)
            if backend.kind.is_rate_limit()
                || is_rate_limit_message(&backend.kind.to_string()) =>
        {
            ErrorClass::RateLimited
        }
        _ => ErrorClass::Transient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptoria_error::{BackendError, BackendErrorKind};

    fn backend(kind: BackendErrorKind) -> ScriptoriaError {
        BackendError::new(kind).into()
    }

    #[test]
    fn structured_rate_limits() {
        assert_eq!(
            classify_error(&backend(BackendErrorKind::RateLimited(String::new()))),
            ErrorClass::RateLimited
        );
        assert_eq!(
            classify_error(&backend(BackendErrorKind::Api {
                status: 429,
                message: String::new()
            })),
            ErrorClass::RateLimited
        );
    }

    #[test]
    fn message_signals() {
        for message in [
            "Rate_limit exceeded",
            "You exceeded your current quota",
            "model is over capacity",
            "RATE-LIMIT hit",
        ] {
            let err = backend(BackendErrorKind::Api {
                status: 503,
                message: message.to_string(),
            });
            assert_eq!(classify_error(&err), ErrorClass::RateLimited, "{message}");
        }
    }

    #[test]
    fn other_failures_are_transient() {
        assert_eq!(
            classify_error(&backend(BackendErrorKind::Timeout("30s".to_string()))),
            ErrorClass::Transient
        );
        assert_eq!(
            classify_error(&backend(BackendErrorKind::Api {
                status: 500,
                message: "internal error".to_string()
            })),
            ErrorClass::Transient
        );
    }
}
