//! Premise to screenplay outline.

use super::{StageKind, prompts, require_text, run_stage};
use crate::ShapeHints;
use scriptoria_core::{Shape, StructuredValue};
use scriptoria_error::ScriptoriaResult;
use scriptoria_rate_limit::ResilientClient;
use tracing::instrument;

/// Generate a screenplay outline record from a story premise.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank premise, otherwise whatever the
/// completion, extraction or normalisation step fails with.
#[instrument(skip(client, premise), fields(premise_chars = premise.chars().count()))]
pub async fn generate_outline(
    client: &ResilientClient,
    premise: &str,
    genre: &str,
) -> ScriptoriaResult<StructuredValue> {
    require_text("premise", premise)?;
    let prompt = prompts::outline(premise.trim(), genre)?;
    run_stage(
        client,
        StageKind::Outline,
        &prompt,
        Shape::Record,
        &ShapeHints::GENERIC,
    )
    .await
}
