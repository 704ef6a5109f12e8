//! Scriptoria - screenplay production packages from a premise or a script.
//!
//! Scriptoria turns a short story premise (or an existing script) into an
//! outline, character profiles, a scene breakdown and sound design notes by
//! chaining model completions. Model output is recovered and validated at
//! every stage, and completions fall back across a ladder of models when one
//! is rate limited.
//!
//! # Quick Start
//!
//! ```no_run
//! use scriptoria::{PipelineExecutor, ScriptoriaConfig, StoryRequest, build_client, render_text};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScriptoriaConfig::load()?;
//! let executor = PipelineExecutor::new(build_client(&config)?);
//!
//! let request = StoryRequest::new(
//!     "A retired astronaut must stop a rogue satellite from crashing into her hometown.",
//!     Some("Thriller".to_string()),
//! );
//! request.validate()?;
//!
//! let package = executor.generate(&request).await?;
//! println!("{}", render_text(&package));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `scriptoria_error` - Error types
//! - `scriptoria_core` - Prompts, shapes, entities and requests
//! - `scriptoria_interface` - `CompletionBackend` trait
//! - `scriptoria_models` - Groq and OpenAI-compatible backends
//! - `scriptoria_rate_limit` - Configuration, rate-limit detection and model fallback
//! - `scriptoria_narrative` - Output recovery, pipeline stages and orchestration
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod render;

pub use backend::{build_backend, build_client};
pub use render::render_text;

pub use scriptoria_core::*;
pub use scriptoria_error::*;
pub use scriptoria_interface::*;
pub use scriptoria_models::{
    DEFAULT_TIMEOUT, GROQ_API_KEY_ENV, GROQ_BASE_URL, GroqBackend, OpenAICompatibleClient,
};
pub use scriptoria_narrative::*;
pub use scriptoria_rate_limit::*;
