//! Orchestrator-level failure.

use crate::ScriptoriaError;

/// A pipeline run aborted because one stage failed.
///
/// Names the stage and keeps the underlying cause as the error source.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: stage '{}' failed: {} at line {} in {}", stage, source, line, file)]
pub struct PipelineError {
    /// Name of the stage that failed
    pub stage: String,
    /// Underlying failure
    #[error(source)]
    pub source: Box<ScriptoriaError>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Wrap a stage failure at the current location.
    #[track_caller]
    pub fn new(stage: impl Into<String>, source: ScriptoriaError) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage: stage.into(),
            source: Box::new(source),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The underlying stage failure.
    pub fn cause(&self) -> &ScriptoriaError {
        &self.source
    }
}
