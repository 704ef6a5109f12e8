//! Outline to character profiles.

use super::{StageKind, name_list, prompts, require_record, run_stage, text_field};
use crate::ShapeHints;
use scriptoria_core::{DEFAULT_GENRE, Shape, StructuredValue};
use scriptoria_error::ScriptoriaResult;
use scriptoria_rate_limit::ResilientClient;
use tracing::instrument;

/// Generate character profiles from an outline record.
///
/// When the outline names main characters, the prompt pins the profiles to
/// exactly those names.
///
/// # Errors
///
/// Returns `InvalidUpstreamData` if `outline` is not a record.
#[instrument(skip_all)]
pub async fn generate_characters(
    client: &ResilientClient,
    outline: &StructuredValue,
) -> ScriptoriaResult<StructuredValue> {
    let record = require_record(StageKind::Characters, "outline", outline)?;

    let prompt = prompts::characters(
        &text_field(record, "title", "Untitled"),
        &text_field(record, "logline", ""),
        &text_field(record, "genre", DEFAULT_GENRE),
        &name_list(record, "mainCharacters"),
    )?;

    run_stage(
        client,
        StageKind::Characters,
        &prompt,
        Shape::RecordList,
        &ShapeHints::CHARACTERS,
    )
    .await
}
