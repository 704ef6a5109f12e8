//! Backend and client construction from configuration.

use scriptoria_error::{ConfigError, ScriptoriaResult};
use scriptoria_interface::CompletionBackend;
use scriptoria_models::GroqBackend;
use scriptoria_rate_limit::{BackendConfig, ModelLadder, ResilientClient, ScriptoriaConfig};
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the configured completion backend.
///
/// Credentials are read here, once, so a missing key fails at startup.
///
/// # Errors
///
/// Returns a `ConfigError` for an unknown provider or a missing API key.
#[instrument(skip(config), fields(provider = %config.provider()))]
pub fn build_backend(config: &BackendConfig) -> ScriptoriaResult<Arc<dyn CompletionBackend>> {
    match config.provider().trim().to_lowercase().as_str() {
        "groq" => {
            let backend =
                GroqBackend::from_env(config.api_key_env(), config.base_url(), config.timeout())?;
            info!(base_url = %backend.base_url(), "Groq backend ready");
            Ok(Arc::new(backend))
        }
        other => Err(ConfigError::new(format!(
            "Unknown backend provider '{}' (supported: groq)",
            other
        ))
        .into()),
    }
}

/// Build the backend and wrap it in a [`ResilientClient`] over the configured ladder.
///
/// # Errors
///
/// Returns a `ConfigError` if the backend cannot be built or the ladder is invalid.
pub fn build_client(config: &ScriptoriaConfig) -> ScriptoriaResult<ResilientClient> {
    let backend = build_backend(config.backend())?;
    let ladder = ModelLadder::from_config(config.fallback())?;
    Ok(ResilientClient::new(backend, ladder))
}
