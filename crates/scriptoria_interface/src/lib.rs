//! Trait definitions for Scriptoria completion backends.
//!
//! A backend turns one [`Prompt`] into raw completion text for a named
//! model. It knows nothing about fallback, JSON repair or pipeline stages;
//! those live in the crates layered above it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use scriptoria_core::Prompt;
use scriptoria_error::ScriptoriaResult;
use std::sync::Arc;

/// A text-completion service addressed by model name.
///
/// Failures are reported as `BackendError`s so the fallback ladder can tell
/// rate limiting apart from other transient faults.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Request one completion from `model`.
    async fn complete(&self, model: &str, prompt: &Prompt) -> ScriptoriaResult<String>;

    /// Provider name (e.g., "groq", "mock").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: CompletionBackend + ?Sized> CompletionBackend for Arc<T> {
    async fn complete(&self, model: &str, prompt: &Prompt) -> ScriptoriaResult<String> {
        (**self).complete(model, prompt).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
