//! Scripted completion backend for tests.

use async_trait::async_trait;
use scriptoria_core::Prompt;
use scriptoria_error::{BackendError, BackendErrorKind, ScriptoriaResult};
use scriptoria_interface::CompletionBackend;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Behavior configuration for one model.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(BackendErrorKind),
    /// Fail N times with the error, then succeed with the text
    FailThenSucceed {
        /// Failures before the first success
        fail_count: usize,
        /// Error returned while failing
        error: BackendErrorKind,
        /// Text returned afterwards
        success_text: String,
    },
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Completion text
    Success(String),
    /// Backend failure
    Error(BackendErrorKind),
}

/// One recorded `complete` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Model the call addressed
    pub model: String,
    /// Prompt that was sent
    pub prompt: Prompt,
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    per_model: HashMap<String, usize>,
}

/// In-memory backend that replays scripted behaviors per model.
///
/// Models without their own behavior fall back to the default one. Clones
/// share call history, so a test can hand one clone to the pipeline and
/// inspect another afterwards. Sequences and fail counts advance per model.
#[derive(Debug, Clone)]
pub struct MockBackend {
    default: MockBehavior,
    models: HashMap<String, MockBehavior>,
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Create a mock backend with a default behavior for every model.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            default: behavior,
            models: HashMap::new(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a mock backend that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock backend that always fails with the given error.
    pub fn new_error(error: BackendErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock backend that fails N times, then succeeds.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: BackendErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::new_with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error,
            success_text: success_text.into(),
        })
    }

    /// Create a mock backend that replays responses in call order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Override the behavior for one model.
    pub fn with_model(mut self, model: impl Into<String>, behavior: MockBehavior) -> Self {
        self.models.insert(model.into(), behavior);
        self
    }

    /// Total number of `complete` calls across all models.
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Number of `complete` calls that addressed `model`.
    pub fn calls_for(&self, model: &str) -> usize {
        self.state().per_model.get(model).copied().unwrap_or(0)
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Models addressed so far, in call order.
    pub fn models_called(&self) -> Vec<String> {
        self.state().calls.iter().map(|c| c.model.clone()).collect()
    }

    /// Forget all recorded calls.
    pub fn reset(&self) {
        let mut state = self.state();
        state.calls.clear();
        state.per_model.clear();
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_response(&self, model: &str, prompt: &Prompt) -> MockResponse {
        let mut state = self.state();
        let count = state.per_model.entry(model.to_string()).or_insert(0);
        let current = *count;
        *count += 1;
        state.calls.push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.clone(),
        });

        let behavior = self.models.get(model).unwrap_or(&self.default);
        match behavior {
            MockBehavior::Success(text) => MockResponse::Success(text.clone()),
            MockBehavior::Error(kind) => MockResponse::Error(kind.clone()),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if current < *fail_count {
                    MockResponse::Error(error.clone())
                } else {
                    MockResponse::Success(success_text.clone())
                }
            }
            MockBehavior::Sequence(responses) => {
                responses.get(current).cloned().unwrap_or_else(|| {
                    MockResponse::Error(BackendErrorKind::Http(format!(
                        "Mock sequence exhausted (call {} beyond {} responses)",
                        current + 1,
                        responses.len()
                    )))
                })
            }
        }
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, model: &str, prompt: &Prompt) -> ScriptoriaResult<String> {
        tokio::task::yield_now().await;
        match self.next_response(model, prompt) {
            MockResponse::Success(text) => {
                debug!(model, "Mock completion");
                Ok(text)
            }
            MockResponse::Error(kind) => Err(BackendError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
