//! The ordered model fallback ladder.

use crate::FallbackConfig;
use scriptoria_error::{ConfigError, ScriptoriaResult};
use std::time::Duration;

/// Ordered model identifiers plus the per-model attempt budget.
///
/// Never empty, and every model gets at least one attempt.
///
/// # Examples
///
/// ```
/// use scriptoria_rate_limit::ModelLadder;
///
/// let ladder = ModelLadder::new(vec!["primary".into(), "backup".into()], 2).unwrap();
/// assert_eq!(ladder.primary(), "primary");
/// assert!(ModelLadder::new(vec![], 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ModelLadder {
    /// Models, primary first
    models: Vec<String>,
    /// Attempts per model
    max_attempts: u32,
    /// Pause between attempts on the same model
    retry_delay: Duration,
}

impl ModelLadder {
    /// Create a ladder with no delay between attempts.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `models` is empty, contains a blank
    /// identifier, or `max_attempts` is zero.
    #[track_caller]
    pub fn new(models: Vec<String>, max_attempts: u32) -> ScriptoriaResult<Self> {
        if models.is_empty() {
            return Err(ConfigError::new("fallback ladder must name at least one model").into());
        }
        if models.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::new("fallback ladder contains a blank model name").into());
        }
        if max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1").into());
        }

        Ok(Self {
            models,
            max_attempts,
            retry_delay: Duration::ZERO,
        })
    }

    /// Build a ladder from the `[fallback]` configuration section.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ModelLadder::new`].
    pub fn from_config(config: &FallbackConfig) -> ScriptoriaResult<Self> {
        Ok(Self::new(config.models().clone(), *config.max_attempts())?
            .with_retry_delay(Duration::from_millis(*config.retry_delay_ms())))
    }

    /// Set the pause between attempts on the same model.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// The first model tried.
    pub fn primary(&self) -> &str {
        // Non-empty by construction
        self.models.first().map(String::as_str).unwrap_or_default()
    }

    /// Upper bound on backend calls for one completion.
    pub fn max_calls(&self) -> u32 {
        self.max_attempts.saturating_mul(self.models.len() as u32)
    }
}
