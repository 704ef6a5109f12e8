//! Core data types for the Scriptoria screenplay pipeline.
//!
//! Everything here is transient and request-scoped: prompts sent to the
//! completion backend, the structured values recovered from its output, the
//! typed screenplay entities, and the finished production package.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod input;
mod lenient;
mod outline;
mod package;
mod prompt;
mod scene;
mod shape;
mod sound;

pub use character::CharacterProfile;
pub use input::{
    DEFAULT_GENRE, PREMISE_MAX_CHARS, PREMISE_MIN_CHARS, SCRIPT_MAX_CHARS, SCRIPT_MIN_CHARS,
    ScriptRequest, StoryRequest, clean_script_text,
};
pub use outline::{Act, ScreenplayOutline, ThreeActStructure};
pub use package::{IntegrityIssue, ProductionPackage};
pub use prompt::{
    DEFAULT_SYSTEM_PROMPT, GenerationProfile, Prompt, PromptBuilder, PromptBuilderError,
    ResponseFormat,
};
pub use scene::Scene;
pub use shape::{Record, Shape, StructuredValue, describe_value};
pub use sound::{Ambience, KeyMoment, MusicTheme, SoundDesign, SoundEffect};
