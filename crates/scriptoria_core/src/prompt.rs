//! Prompt types sent to the completion backend.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// System text used when a stage does not supply its own.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a professional screenplay writer and story consultant.";

/// Response-shape hint passed to the backend.
///
/// # Examples
///
/// ```
/// use scriptoria_core::ResponseFormat;
///
/// assert_eq!(ResponseFormat::default(), ResponseFormat::Text);
/// assert_eq!(format!("{}", ResponseFormat::JsonObject), "json_object");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text; the model may wrap JSON in prose
    #[default]
    Text,
    /// Ask the backend to force a single JSON object
    JsonObject,
}

/// Sampling settings for one completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationProfile {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl GenerationProfile {
    /// High-variance profile for short creative records.
    pub const CREATIVE: Self = Self {
        temperature: 0.9,
        max_tokens: 2048,
    };

    /// Longer outputs (scene breakdowns, script analysis).
    pub const EXTENDED: Self = Self {
        temperature: 0.8,
        max_tokens: 4096,
    };
}

impl Default for GenerationProfile {
    fn default() -> Self {
        Self::CREATIVE
    }
}

/// An immutable completion request: system and user text plus generation hints.
///
/// # Examples
///
/// ```
/// use scriptoria_core::{GenerationProfile, Prompt, ResponseFormat};
///
/// let prompt = Prompt::builder()
///     .user("Write a logline about a lighthouse keeper.")
///     .response_format(ResponseFormat::JsonObject)
///     .build()
///     .unwrap();
///
/// assert!(prompt.forces_json());
/// assert_eq!(*prompt.profile(), GenerationProfile::CREATIVE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Prompt {
    /// Instructions framing the model's role
    #[builder(default = "DEFAULT_SYSTEM_PROMPT.to_string()")]
    system: String,
    /// The request body
    user: String,
    /// Response-shape hint
    #[builder(default)]
    response_format: ResponseFormat,
    /// Sampling settings
    #[builder(default)]
    profile: GenerationProfile,
}

impl Prompt {
    /// Creates a new builder for Prompt.
    pub fn builder() -> PromptBuilder {
        PromptBuilder::default()
    }

    /// Whether the backend should be told to emit a JSON object.
    pub fn forces_json(&self) -> bool {
        self.response_format == ResponseFormat::JsonObject
    }
}
