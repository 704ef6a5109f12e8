//! Top-level error wrapper types.

use crate::{
    BackendError, BuilderError, ConfigError, GenerationError, IoError, JsonError, NarrativeError,
    OutputError, PipelineError, ValidationError,
};

/// Every failure the pipeline can surface.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{ScriptoriaError, ScriptoriaErrorKind, ConfigError};
///
/// let err: ScriptoriaError = ConfigError::new("missing key").into();
/// assert!(matches!(err.kind(), ScriptoriaErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptoriaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Single backend call failure
    #[from(BackendError)]
    Backend(BackendError),
    /// Fallback ladder exhausted
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Unusable model output
    #[from(OutputError)]
    Output(OutputError),
    /// Stage input check failure
    #[from(NarrativeError)]
    Narrative(NarrativeError),
    /// A stage aborted the run
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Request validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// File I/O error
    #[from(IoError)]
    Io(IoError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Scriptoria error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{ScriptoriaResult, ValidationError};
///
/// fn check(premise: &str) -> ScriptoriaResult<()> {
///     if premise.is_empty() {
///         Err(ValidationError::new("storyIdea", "is required"))?
///     }
///     Ok(())
/// }
///
/// assert!(check("").is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptoria Error: {}", _0)]
pub struct ScriptoriaError(Box<ScriptoriaErrorKind>);

impl ScriptoriaError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptoriaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptoriaErrorKind {
        &self.0
    }

    /// Unwrap pipeline attribution, returning the innermost stage failure.
    pub fn root_cause(&self) -> &ScriptoriaError {
        match self.kind() {
            ScriptoriaErrorKind::Pipeline(pipeline) => pipeline.cause().root_cause(),
            _ => self,
        }
    }
}

// Generic From implementation for any type that converts to ScriptoriaErrorKind
impl<T> From<T> for ScriptoriaError
where
    T: Into<ScriptoriaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptoria operations.
pub type ScriptoriaResult<T> = std::result::Result<T, ScriptoriaError>;
