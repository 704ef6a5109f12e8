//! Pipeline orchestration.
//!
//! Runs the stages strictly in sequence and turns the first stage failure
//! into a single `PipelineError` naming that stage. No partial package is
//! ever returned.

use crate::stages::{
    StageKind, analyze_script, extract_character_names, generate_characters, generate_outline,
    generate_scenes, generate_sound_design, name_list,
};
use scriptoria_core::{ProductionPackage, ScriptRequest, StoryRequest, StructuredValue};
use scriptoria_error::{
    NarrativeError, NarrativeErrorKind, PipelineError, ScriptoriaError, ScriptoriaResult,
};
use scriptoria_rate_limit::ResilientClient;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

const MAIN_CHARACTERS: &str = "mainCharacters";

/// Runs premise-to-package and script-to-package pipelines.
///
/// Cheap to clone; concurrent runs share only the completion client.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct PipelineExecutor {
    /// Completion client shared by every stage
    client: ResilientClient,
    /// Optional limit on a whole run
    deadline: Option<Duration>,
}

impl PipelineExecutor {
    /// Create an executor with no deadline.
    pub fn new(client: ResilientClient) -> Self {
        Self {
            client,
            deadline: None,
        }
    }

    /// Bound each whole run by `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Generate a production package from a story premise.
    ///
    /// Stages: outline, characters, scenes, sound design, assembly.
    ///
    /// # Errors
    ///
    /// Returns a `PipelineError` naming the first stage that failed, or
    /// `DeadlineExceeded` if the run outlives the deadline.
    pub async fn generate(&self, request: &StoryRequest) -> ScriptoriaResult<ProductionPackage> {
        let run_id = Uuid::new_v4();
        let span = info_span!("generate", %run_id, genre = %request.genre());

        self.bounded(async {
            info!("Starting premise pipeline");
            let outline = self
                .stage(
                    StageKind::Outline,
                    generate_outline(&self.client, request.premise(), request.genre()),
                )
                .await?;
            self.finish(outline).await
        })
        .instrument(span)
        .await
    }

    /// Reverse-engineer a production package from an existing script.
    ///
    /// Stages: analysis, optional character-name extraction, characters,
    /// scenes, sound design, assembly.
    ///
    /// # Errors
    ///
    /// Returns a `PipelineError` naming the first stage that failed, or
    /// `DeadlineExceeded` if the run outlives the deadline. Name extraction
    /// never fails the run.
    pub async fn analyze(&self, request: &ScriptRequest) -> ScriptoriaResult<ProductionPackage> {
        let run_id = Uuid::new_v4();
        let span = info_span!("analyze", %run_id, genre = %request.genre());

        self.bounded(async {
            info!("Starting script analysis pipeline");
            let outline = self
                .stage(
                    StageKind::Analysis,
                    analyze_script(&self.client, request.script(), request.genre()),
                )
                .await?;

            let outline = match outline {
                StructuredValue::Record(mut record)
                    if name_list(&record, MAIN_CHARACTERS).is_empty() =>
                {
                    let names = extract_character_names(&self.client, request.script()).await;
                    if !names.is_empty() {
                        debug!(count = names.len(), "Filled mainCharacters from script");
                        record.insert(
                            MAIN_CHARACTERS.to_string(),
                            Value::Array(names.into_iter().map(Value::String).collect()),
                        );
                    }
                    StructuredValue::Record(record)
                }
                other => other,
            };

            self.finish(outline).await
        })
        .instrument(span)
        .await
    }

    /// Characters, scenes, sound design and assembly from an outline.
    async fn finish(&self, outline: StructuredValue) -> ScriptoriaResult<ProductionPackage> {
        let characters = self
            .stage(
                StageKind::Characters,
                generate_characters(&self.client, &outline),
            )
            .await?;
        let scenes = self
            .stage(
                StageKind::Scenes,
                generate_scenes(&self.client, &outline, &characters),
            )
            .await?;
        let sound = self
            .stage(
                StageKind::SoundDesign,
                generate_sound_design(&self.client, &outline, &scenes),
            )
            .await?;

        let package = self
            .stage(StageKind::Assembly, async {
                ProductionPackage::from_structured(&outline, &characters, &scenes, &sound)
            })
            .await?;

        for issue in package.integrity_issues() {
            warn!(%issue, "Package integrity issue");
        }
        info!(
            characters = package.characters().len(),
            scenes = package.scenes().len(),
            "Pipeline complete"
        );
        Ok(package)
    }

    /// Await one stage, attributing any failure to it.
    async fn stage<T>(
        &self,
        stage: StageKind,
        fut: impl Future<Output = ScriptoriaResult<T>>,
    ) -> ScriptoriaResult<T> {
        debug!(%stage, "Running stage");
        fut.await.map_err(|e| {
            error!(%stage, error = %e, "Stage failed, aborting pipeline");
            ScriptoriaError::from(PipelineError::new(stage.to_string(), e))
        })
    }

    async fn bounded<T>(
        &self,
        run: impl Future<Output = ScriptoriaResult<T>>,
    ) -> ScriptoriaResult<T> {
        match self.deadline {
            None => run.await,
            Some(deadline) => match tokio::time::timeout(deadline, run).await {
                Ok(result) => result,
                Err(_) => {
                    error!(deadline = ?deadline, "Pipeline deadline exceeded");
                    Err(NarrativeError::new(NarrativeErrorKind::DeadlineExceeded(deadline)).into())
                }
            },
        }
    }
}
