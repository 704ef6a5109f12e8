//! Groq LPU inference backend using the OpenAI-compatible client.

use crate::openai_compat::OpenAICompatibleClient;
use async_trait::async_trait;
use scriptoria_core::Prompt;
use scriptoria_error::{ConfigError, ScriptoriaResult};
use scriptoria_interface::CompletionBackend;
use std::time::Duration;
use tracing::instrument;

/// Groq chat completions endpoint.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Groq completion backend.
///
/// The model is chosen per call so a single backend serves the whole
/// fallback ladder.
#[derive(Debug, Clone)]
pub struct GroqBackend {
    inner: OpenAICompatibleClient,
}

impl GroqBackend {
    /// Creates a Groq backend reading the API key from `api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the variable is unset or blank.
    #[instrument(skip(base_url))]
    pub fn from_env(api_key_env: &str, base_url: &str, timeout: Duration) -> ScriptoriaResult<Self> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} not set", api_key_env)))?;

        Self::with_api_key(api_key, base_url, timeout)
    }

    /// Creates a Groq backend with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the HTTP client cannot be initialized.
    #[instrument(skip(api_key, base_url))]
    pub fn with_api_key(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> ScriptoriaResult<Self> {
        let inner = OpenAICompatibleClient::new(api_key, base_url.to_string(), "groq", timeout)?;
        Ok(Self { inner })
    }

    /// The endpoint this backend posts to.
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }
}

#[async_trait]
impl CompletionBackend for GroqBackend {
    #[instrument(skip(self, prompt), fields(provider = "groq", model = %model))]
    async fn complete(&self, model: &str, prompt: &Prompt) -> ScriptoriaResult<String> {
        self.inner.complete(model, prompt).await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
