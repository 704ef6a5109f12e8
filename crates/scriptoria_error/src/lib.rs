//! Error types for the Scriptoria pipeline.
//!
//! This crate provides the error taxonomy shared by every Scriptoria crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name the specific condition
//! - `*Error` structs wrap the kind with source location tracking
//! - Constructors use `#[track_caller]` to capture the location automatically
//!
//! The taxonomy maps onto the pipeline's failure modes:
//!
//! | Failure | Type |
//! |---|---|
//! | missing credential, bad ladder | [`ConfigError`] |
//! | a single backend call failed | [`BackendError`] |
//! | every model in the ladder exhausted | [`GenerationError`] |
//! | no parseable JSON / wrong shape | [`OutputError`] |
//! | bad stage input | [`NarrativeError`] |
//! | a stage aborted the run | [`PipelineError`] |
//! | request out of bounds | [`ValidationError`] |
//! | script or output file unusable | [`IoError`] |
//!
//! # Examples
//!
//! ```
//! use scriptoria_error::{ConfigError, ScriptoriaResult};
//!
//! fn load_key() -> ScriptoriaResult<String> {
//!     Err(ConfigError::new("GROQ_API_KEY not set"))?
//! }
//!
//! assert!(load_key().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod builder;
mod config;
mod error;
mod generation;
mod io;
mod json;
mod narrative;
mod output;
mod pipeline;
mod validation;

pub use backend::{BackendError, BackendErrorKind};
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{ScriptoriaError, ScriptoriaErrorKind, ScriptoriaResult};
pub use generation::GenerationError;
pub use io::{IoError, IoErrorKind};
pub use json::JsonError;
pub use narrative::{NarrativeError, NarrativeErrorKind};
pub use output::{OutputError, OutputErrorKind};
pub use pipeline::PipelineError;
pub use validation::ValidationError;
