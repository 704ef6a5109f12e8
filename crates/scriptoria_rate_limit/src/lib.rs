//! Rate-limit handling and model fallback for Scriptoria.
//!
//! This crate provides:
//! - Classification of backend failures into rate limiting vs transient faults
//! - Layered TOML configuration for the backend and fallback ladder
//! - [`ModelLadder`], the ordered list of models with a per-model attempt budget
//! - [`ResilientClient`], which retries transient failures on the same model
//!   and abandons a model on the first rate limit
//!
//! # Example
//!
//! ```no_run
//! use scriptoria_rate_limit::{ModelLadder, ResilientClient, ScriptoriaConfig};
//! # use scriptoria_interface::CompletionBackend;
//! # use std::sync::Arc;
//!
//! # fn build(backend: Arc<dyn CompletionBackend>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScriptoriaConfig::load()?;
//! let ladder = ModelLadder::from_config(config.fallback())?;
//! let client = ResilientClient::new(backend, ladder);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod detector;
mod ladder;

pub use client::ResilientClient;
pub use config::{BackendConfig, FallbackConfig, ScriptoriaConfig};
pub use detector::{ErrorClass, classify_error, is_rate_limit_message};
pub use ladder::ModelLadder;
