//! Outline and characters to scene breakdown.

use super::{StageKind, prompts, require_record, require_record_list, run_stage, text_field};
use crate::ShapeHints;
use scriptoria_core::{DEFAULT_GENRE, Shape, StructuredValue};
use scriptoria_error::ScriptoriaResult;
use scriptoria_rate_limit::ResilientClient;
use tracing::instrument;

/// Generate a scene breakdown that only uses the given characters' names.
///
/// # Errors
///
/// Returns `InvalidUpstreamData` if `outline` is not a record or
/// `characters` is not a record list.
#[instrument(skip_all)]
pub async fn generate_scenes(
    client: &ResilientClient,
    outline: &StructuredValue,
    characters: &StructuredValue,
) -> ScriptoriaResult<StructuredValue> {
    let record = require_record(StageKind::Scenes, "outline", outline)?;
    let characters = require_record_list(StageKind::Scenes, "characters", characters)?;

    let names: Vec<String> = characters
        .iter()
        .map(|c| text_field(c, "name", "Unknown"))
        .collect();

    let prompt = prompts::scenes(
        &text_field(record, "title", "Untitled"),
        &text_field(record, "logline", ""),
        &text_field(record, "genre", DEFAULT_GENRE),
        &names,
    )?;

    run_stage(
        client,
        StageKind::Scenes,
        &prompt,
        Shape::RecordList,
        &ShapeHints::SCENES,
    )
    .await
}
