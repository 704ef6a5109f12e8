//! Outline and scenes to sound design.

use super::prompts::{SOUND_CONTEXT_ACTION_CHARS, SOUND_CONTEXT_SCENES};
use super::{StageKind, prompts, require_record, require_record_list, run_stage, text_field};
use crate::ShapeHints;
use scriptoria_core::{DEFAULT_GENRE, Record, Shape, StructuredValue};
use scriptoria_error::ScriptoriaResult;
use scriptoria_rate_limit::ResilientClient;
use tracing::instrument;

/// Generate sound design notes from the outline and the leading scenes.
///
/// # Errors
///
/// Returns `InvalidUpstreamData` if `outline` is not a record or `scenes`
/// is not a record list.
#[instrument(skip_all)]
pub async fn generate_sound_design(
    client: &ResilientClient,
    outline: &StructuredValue,
    scenes: &StructuredValue,
) -> ScriptoriaResult<StructuredValue> {
    let record = require_record(StageKind::SoundDesign, "outline", outline)?;
    let scenes = require_record_list(StageKind::SoundDesign, "scenes", scenes)?;

    let summary: Vec<String> = scenes
        .iter()
        .take(SOUND_CONTEXT_SCENES)
        .map(scene_line)
        .collect();
    let numbers: Vec<String> = scenes
        .iter()
        .map(|s| text_field(s, "sceneNumber", "?"))
        .collect();

    let prompt = prompts::sound_design(
        &text_field(record, "title", "Untitled"),
        &text_field(record, "genre", DEFAULT_GENRE),
        &summary,
        &numbers,
    )?;

    run_stage(
        client,
        StageKind::SoundDesign,
        &prompt,
        Shape::Record,
        &ShapeHints::GENERIC,
    )
    .await
}

fn scene_line(scene: &Record) -> String {
    let action: String = text_field(scene, "action", "")
        .chars()
        .take(SOUND_CONTEXT_ACTION_CHARS)
        .collect();
    format!(
        "Scene {}: {} - {}",
        text_field(scene, "sceneNumber", "?"),
        text_field(scene, "location", "Unknown"),
        action
    )
}
