//! Pipeline stages.
//!
//! Every stage has the same structure: check its upstream input, build a
//! prompt, complete it through the fallback ladder, then extract, repair and
//! normalise the output to the stage's shape. The first failure propagates
//! untouched; nothing partial is passed forward.

mod analysis;
mod characters;
mod outline;
mod prompts;
mod scenes;
mod sound;

pub use analysis::{analyze_script, extract_character_names};
pub use characters::generate_characters;
pub use outline::generate_outline;
pub use scenes::generate_scenes;
pub use sound::generate_sound_design;

use crate::{ShapeHints, normalize, parse_model_output};
use scriptoria_core::{Prompt, Record, Shape, StructuredValue};
use scriptoria_error::{NarrativeError, NarrativeErrorKind, ScriptoriaResult};
use scriptoria_rate_limit::ResilientClient;
use serde_json::Value;
use tracing::{debug, instrument};

/// Named pipeline steps, used for logging and failure attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StageKind {
    /// Premise to outline
    Outline,
    /// Script to outline
    Analysis,
    /// Best-effort speaking-character names from a script
    CharacterNames,
    /// Outline to character profiles
    Characters,
    /// Outline and characters to scene breakdown
    Scenes,
    /// Outline and scenes to sound design
    SoundDesign,
    /// Typed package assembly
    Assembly,
}

/// Complete a prompt and coerce the output to `expected`.
#[instrument(skip(client, prompt, hints), fields(stage = %stage, expected = %expected))]
pub(crate) async fn run_stage(
    client: &ResilientClient,
    stage: StageKind,
    prompt: &Prompt,
    expected: Shape,
    hints: &ShapeHints,
) -> ScriptoriaResult<StructuredValue> {
    let raw = client.complete(prompt).await?;
    debug!(response_length = raw.len(), "Received completion");

    let value = parse_model_output(&raw)?;
    let structured = normalize(value, expected, hints)?;

    debug!(output = %structured.describe(), "Stage output validated");
    Ok(structured)
}

#[track_caller]
fn invalid_upstream(stage: StageKind, expected: String, found: String) -> NarrativeError {
    NarrativeError::new(NarrativeErrorKind::InvalidUpstreamData {
        stage: stage.to_string(),
        expected,
        found,
    })
}

/// The upstream value as a record, or `InvalidUpstreamData`.
#[track_caller]
pub(crate) fn require_record<'a>(
    stage: StageKind,
    what: &str,
    input: &'a StructuredValue,
) -> ScriptoriaResult<&'a Record> {
    input.as_record().ok_or_else(|| {
        invalid_upstream(stage, format!("{} {}", what, Shape::Record), input.describe()).into()
    })
}

/// The upstream value as a record list, or `InvalidUpstreamData`.
#[track_caller]
pub(crate) fn require_record_list<'a>(
    stage: StageKind,
    what: &str,
    input: &'a StructuredValue,
) -> ScriptoriaResult<&'a [Record]> {
    input.as_record_list().ok_or_else(|| {
        invalid_upstream(stage, format!("{} {}", what, Shape::RecordList), input.describe()).into()
    })
}

/// Reject empty or whitespace-only direct input.
#[track_caller]
pub(crate) fn require_text(field: &str, text: &str) -> ScriptoriaResult<()> {
    if text.trim().is_empty() {
        return Err(NarrativeError::new(NarrativeErrorKind::InvalidInput(format!(
            "{} is empty",
            field
        )))
        .into());
    }
    Ok(())
}

/// A display string for a field, or `default` when absent or blank.
pub(crate) fn text_field(record: &Record, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// A list of names from an array of strings or `{name}` objects, or a
/// comma-joined string.
pub(crate) fn name_list(record: &Record, key: &str) -> Vec<String> {
    match record.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(entry) => entry.get("name").and_then(Value::as_str),
                other => other.as_str(),
            })
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn stage_names_are_snake_case() {
        assert_eq!(StageKind::SoundDesign.to_string(), "sound_design");
        assert_eq!(StageKind::CharacterNames.to_string(), "character_names");
    }

    #[test]
    fn text_field_falls_back_on_blank() {
        let r = record(json!({"title": "  ", "genre": "Thriller"}));
        assert_eq!(text_field(&r, "title", "Untitled"), "Untitled");
        assert_eq!(text_field(&r, "genre", "Drama"), "Thriller");
        assert_eq!(text_field(&r, "logline", ""), "");
    }

    #[test]
    fn name_list_accepts_both_forms() {
        let r = record(json!({"a": ["Mira Chen", " Dana Osei ", 3], "b": "Mira, Dana"}));
        assert_eq!(name_list(&r, "a"), vec!["Mira Chen", "Dana Osei"]);
        assert_eq!(name_list(&r, "b"), vec!["Mira", "Dana"]);
        assert!(name_list(&r, "missing").is_empty());
    }

    #[test]
    fn name_list_reads_names_from_objects() {
        let r = record(json!({"a": [{"name": "Mira Chen", "role": "lead"}, {"role": "extra"}, "Dana Osei"]}));
        assert_eq!(name_list(&r, "a"), vec!["Mira Chen", "Dana Osei"]);
    }

    #[test]
    fn wrong_upstream_shape_is_rejected() {
        let list = StructuredValue::RecordList(vec![]);
        let err = require_record(StageKind::Characters, "outline", &list).unwrap_err();
        assert!(err.to_string().contains("characters"));
    }

    #[test]
    fn blank_text_is_invalid_input() {
        assert!(require_text("premise", " \n\t").is_err());
        assert!(require_text("premise", "A heist on the moon").is_ok());
    }
}
