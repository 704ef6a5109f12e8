//! Pipeline requests and their validation.

use scriptoria_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Genre used when a request omits one.
pub const DEFAULT_GENRE: &str = "Drama";
/// Shortest accepted premise, in characters.
pub const PREMISE_MIN_CHARS: usize = 20;
/// Longest accepted premise, in characters.
pub const PREMISE_MAX_CHARS: usize = 500;
/// Shortest accepted script, in characters.
pub const SCRIPT_MIN_CHARS: usize = 100;
/// Longest accepted script, in characters.
pub const SCRIPT_MAX_CHARS: usize = 100_000;

/// A request to generate a production package from a story premise.
///
/// # Examples
///
/// ```
/// use scriptoria_core::StoryRequest;
///
/// let request = StoryRequest::new("An astronaut discovers a signal from Earth's future", None);
/// assert_eq!(request.genre(), "Drama");
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryRequest {
    /// Short free-text story idea
    premise: String,
    /// Genre label
    genre: String,
}

impl StoryRequest {
    /// Create a request; a missing or blank genre falls back to [`DEFAULT_GENRE`].
    pub fn new(premise: impl Into<String>, genre: Option<String>) -> Self {
        Self {
            premise: premise.into(),
            genre: genre_or_default(genre),
        }
    }

    /// Check the premise length bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length(
            "premise",
            self.premise.trim(),
            PREMISE_MIN_CHARS,
            PREMISE_MAX_CHARS,
        )
    }
}

/// A request to analyze an existing script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ScriptRequest {
    /// Script text, already cleaned
    script: String,
    /// Genre label
    genre: String,
}

impl ScriptRequest {
    /// Create a request; the script is passed through [`clean_script_text`].
    pub fn new(script: &str, genre: Option<String>) -> Self {
        Self {
            script: clean_script_text(script),
            genre: genre_or_default(genre),
        }
    }

    /// Check the script length bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("script", &self.script, SCRIPT_MIN_CHARS, SCRIPT_MAX_CHARS)
    }
}

/// Trim every line and drop the blank ones.
///
/// # Examples
///
/// ```
/// use scriptoria_core::clean_script_text;
///
/// let cleaned = clean_script_text("  INT. LAB - NIGHT  \n\n\n   MIRA enters.\n");
/// assert_eq!(cleaned, "INT. LAB - NIGHT\nMIRA enters.");
/// ```
pub fn clean_script_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn genre_or_default(genre: Option<String>) -> String {
    genre
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| DEFAULT_GENRE.to_string())
}

#[track_caller]
fn check_length(field: &str, text: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let chars = text.chars().count();
    if chars < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {} characters (got {})", min, chars),
        ));
    }
    if chars > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters (got {})", max, chars),
        ));
    }
    Ok(())
}
