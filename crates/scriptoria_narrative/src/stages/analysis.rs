//! Script to screenplay outline, plus the character-name fallback.

use super::{StageKind, prompts, require_text, run_stage};
use crate::{ShapeHints, parse_model_output};
use scriptoria_core::{Shape, StructuredValue};
use scriptoria_error::ScriptoriaResult;
use scriptoria_rate_limit::ResilientClient;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Reverse-engineer an outline record (including `mainCharacters`) from a script.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank script, otherwise whatever the
/// completion, extraction or normalisation step fails with.
#[instrument(skip(client, script), fields(script_chars = script.chars().count()))]
pub async fn analyze_script(
    client: &ResilientClient,
    script: &str,
    genre: &str,
) -> ScriptoriaResult<StructuredValue> {
    require_text("script", script)?;
    let prompt = prompts::analysis(script, genre)?;
    run_stage(
        client,
        StageKind::Analysis,
        &prompt,
        Shape::Record,
        &ShapeHints::GENERIC,
    )
    .await
}

/// Ask for the speaking character names in a script.
///
/// Best-effort: any failure is logged and yields an empty list.
#[instrument(skip(client, script))]
pub async fn extract_character_names(client: &ResilientClient, script: &str) -> Vec<String> {
    if script.trim().is_empty() {
        return Vec::new();
    }

    let result = async {
        let prompt = prompts::character_names(script)?;
        let raw = client.complete(&prompt).await?;
        parse_model_output(&raw)
    }
    .await;

    match result {
        Ok(value) => {
            let names = names_from_value(&value);
            debug!(count = names.len(), "Extracted character names");
            names
        }
        Err(e) => {
            warn!(stage = %StageKind::CharacterNames, error = %e, "Character name extraction failed");
            Vec::new()
        }
    }
}

/// Names from a string array, or from the first string array inside a record.
fn names_from_value(value: &Value) -> Vec<String> {
    let strings = |items: &Vec<Value>| -> Vec<String> {
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Object(record) => record
                    .get("name")
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect()
    };

    match value {
        Value::Array(items) => strings(items),
        Value::Object(record) => record
            .values()
            .filter_map(Value::as_array)
            .map(strings)
            .find(|names| !names.is_empty())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
