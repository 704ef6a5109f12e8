//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use reqwest::{Client, StatusCode};
use scriptoria_core::Prompt;
use scriptoria_error::{BackendError, BackendErrorKind, ConfigError, ScriptoriaResult};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for any API that follows the OpenAI chat completions format.
///
/// Holds only configuration and a pooled connection handle, so clones are
/// cheap and one instance can serve concurrent pipeline runs.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    base_url: String,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `base_url` - Full chat completions endpoint URL
    /// * `provider_name` - Name of the provider (for logging/tracing)
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the HTTP client cannot be built.
    #[instrument(skip(api_key), fields(provider = provider_name))]
    pub fn new(
        api_key: String,
        base_url: String,
        provider_name: &'static str,
        timeout: Duration,
    ) -> ScriptoriaResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            provider = provider_name,
            url = %base_url,
            timeout_secs = timeout.as_secs(),
            "Created OpenAI-compatible client"
        );

        Ok(Self {
            client,
            api_key,
            base_url,
            provider_name,
        })
    }

    /// Requests one chat completion from `model`.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` classified by transport failure, timeout,
    /// rate limiting (HTTP 429), other non-success status, or an
    /// undecodable or empty response.
    #[instrument(skip(self, prompt), fields(provider = self.provider_name, model = %model))]
    pub async fn complete(&self, model: &str, prompt: &Prompt) -> ScriptoriaResult<String> {
        let chat_request = conversions::to_chat_request(prompt, model)?;

        debug!(
            message_count = chat_request.messages().len(),
            json_mode = chat_request.response_format().is_some(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                if e.is_timeout() {
                    BackendError::new(BackendErrorKind::Timeout(e.to_string()))
                } else {
                    BackendError::new(BackendErrorKind::Http(format!("Request failed: {}", e)))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            let kind = if status == StatusCode::TOO_MANY_REQUESTS {
                BackendErrorKind::RateLimited(error_text)
            } else {
                BackendErrorKind::Api {
                    status: status.as_u16(),
                    message: error_text,
                }
            };
            return Err(BackendError::new(kind).into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            BackendError::new(BackendErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            choices = chat_response.choices.len(),
            total_tokens = chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    /// Returns the endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
