//! Screenplay pipeline for Scriptoria.
//!
//! This crate turns free-form model output into validated structured data
//! and chains the screenplay stages together:
//!
//! - [`extract_json`] and [`repair_and_parse`] recover JSON from prose,
//!   markdown fences, trailing commas and comments
//! - [`normalize`] coerces parsed values into a record or a record list,
//!   trying [`LIST_EXTRACTORS`] in order when a list arrives wrapped
//! - the stage functions build prompts from upstream data and run them
//!   through a [`ResilientClient`](scriptoria_rate_limit::ResilientClient)
//! - [`PipelineExecutor`] runs the stages in sequence and attributes the
//!   first failure to its stage
//!
//! # Example
//!
//! ```no_run
//! use scriptoria_core::StoryRequest;
//! use scriptoria_narrative::PipelineExecutor;
//! # use scriptoria_rate_limit::ResilientClient;
//!
//! # async fn run(client: ResilientClient) -> scriptoria_error::ScriptoriaResult<()> {
//! let executor = PipelineExecutor::new(client);
//! let request = StoryRequest::new(
//!     "A retired astronaut must stop a rogue satellite from crashing into her hometown.",
//!     Some("Thriller".to_string()),
//! );
//! let package = executor.generate(&request).await?;
//! println!("{}", package.outline().title);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod extraction;
mod normalize;
mod stages;

pub use executor::PipelineExecutor;
pub use extraction::{
    PREVIEW_CHARS, extract_json, parse_model_output, remove_trailing_commas, repair_and_parse,
    strip_control_characters,
};
pub use normalize::{
    LIST_EXTRACTORS, ListExtractor, ShapeHints, from_keyed_records, from_longest_array,
    from_single_array, from_wrapper_key, normalize,
};
pub use stages::{
    StageKind, analyze_script, extract_character_names, generate_characters, generate_outline,
    generate_scenes, generate_sound_design,
};
