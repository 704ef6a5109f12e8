//! Completion client that walks the model ladder.

use crate::{ErrorClass, ModelLadder, classify_error};
use scriptoria_core::Prompt;
use scriptoria_error::{GenerationError, ScriptoriaResult};
use scriptoria_interface::CompletionBackend;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio_retry2::strategy::FixedInterval;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Completion client with per-model retry and cross-model fallback.
///
/// For each model in ladder order, transient failures are retried up to the
/// attempt budget; a rate-limit-classified failure abandons the model at
/// once. The first success is returned. Exhausting every model yields a
/// `GenerationError` carrying the last failure.
///
/// Holds no mutable state, so one clone per task is fine.
#[derive(Clone)]
pub struct ResilientClient {
    backend: Arc<dyn CompletionBackend>,
    ladder: ModelLadder,
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("provider", &self.backend.provider_name())
            .field("ladder", &self.ladder)
            .finish()
    }
}

impl ResilientClient {
    /// Create a client over a shared backend.
    pub fn new(backend: Arc<dyn CompletionBackend>, ladder: ModelLadder) -> Self {
        Self { backend, ladder }
    }

    /// The ladder this client walks.
    pub fn ladder(&self) -> &ModelLadder {
        &self.ladder
    }

    /// The backend provider name.
    pub fn provider_name(&self) -> &'static str {
        self.backend.provider_name()
    }

    /// Request one completion, falling back across the ladder.
    ///
    /// # Errors
    ///
    /// Returns a `GenerationError` once every model has exhausted its budget.
    #[instrument(skip(self, prompt), fields(provider = self.backend.provider_name(), json = prompt.forces_json()))]
    pub async fn complete(&self, prompt: &Prompt) -> ScriptoriaResult<String> {
        let attempts = AtomicU32::new(0);
        let mut last_error = String::from("no attempts made");

        for model in self.ladder.models() {
            let retries = self.ladder.max_attempts().saturating_sub(1) as usize;
            let strategy = FixedInterval::new(*self.ladder.retry_delay()).take(retries);

            let result = Retry::spawn(strategy, || {
                let attempts = &attempts;
                let backend = &self.backend;
                async move {
                    let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    debug!(model = %model, attempt, "Requesting completion");
                    backend.complete(model, prompt).await.map_err(|err| {
                        match classify_error(&err) {
                            ErrorClass::RateLimited => {
                                warn!(model = %model, error = %err, "Rate limited, abandoning model");
                                RetryError::Permanent(err)
                            }
                            ErrorClass::Transient => {
                                warn!(model = %model, error = %err, "Completion attempt failed");
                                RetryError::Transient {
                                    err,
                                    retry_after: None,
                                }
                            }
                        }
                    })
                }
            })
            .await;

            match result {
                Ok(text) => {
                    debug!(
                        model = %model,
                        attempts = attempts.load(Ordering::SeqCst),
                        "Completion succeeded"
                    );
                    return Ok(text);
                }
                Err(err) => {
                    warn!(model = %model, error = %err, "Model exhausted, trying next");
                    last_error = err.to_string();
                }
            }
        }

        let attempts = attempts.load(Ordering::SeqCst);
        warn!(attempts, "Every model in the fallback ladder failed");
        Err(GenerationError::new(self.ladder.models().clone(), attempts, last_error).into())
    }
}
