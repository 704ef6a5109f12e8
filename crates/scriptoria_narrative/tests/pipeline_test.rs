mod common;

use common::{CHARACTERS, OUTLINE, PREMISE, SCENES, SOUND, client};
use scriptoria_core::{IntegrityIssue, ScriptRequest, StoryRequest};
use scriptoria_error::{BackendErrorKind, NarrativeErrorKind, ScriptoriaErrorKind};
use scriptoria_models::{MockBackend, MockResponse};
use scriptoria_narrative::PipelineExecutor;
use scriptoria_rate_limit::{ModelLadder, ResilientClient};
use std::sync::Arc;
use std::time::Duration;

fn responses(texts: &[&str]) -> Vec<MockResponse> {
    texts
        .iter()
        .map(|t| MockResponse::Success(t.to_string()))
        .collect()
}

const SCRIPT: &str = "INT. GROUND STATION - NIGHT\nMIRA CHEN stares at the telemetry.\nMIRA CHEN: It's coming down on Harlow.\nDANA OSEI: Then we move it.";

#[tokio::test]
async fn premise_runs_all_stages_in_order() {
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, SCENES, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));
    let request = StoryRequest::new(PREMISE, Some("Thriller".to_string()));

    let package = executor.generate(&request).await.unwrap();

    assert_eq!(package.outline().title, "Final Eclipse");
    assert_eq!(package.characters().len(), 2);
    assert_eq!(package.scenes().len(), 2);
    assert_eq!(package.sound_design().key_moments[0].scene, 2);
    assert!(package.integrity_issues().is_empty());

    let calls = mock.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|c| c.model == "primary"));
    assert!(calls[0].prompt.user().contains(PREMISE));
    assert!(calls[3].prompt.user().contains("Valid scene numbers: 1, 2"));
}

#[tokio::test]
async fn package_serializes_outline_as_screenplay() {
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, SCENES, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();
    let json = serde_json::to_value(&package).unwrap();

    assert_eq!(json["screenplay"]["title"], "Final Eclipse");
    assert!(json["soundDesign"]["musicTheme"].is_object());
    assert!(json["generatedAt"].is_string());
}

#[tokio::test]
async fn malformed_stage_aborts_remaining_stages() {
    let mock = MockBackend::new_sequence(responses(&[
        OUTLINE,
        CHARACTERS,
        "I could not think of any scenes, sorry.",
        SOUND,
    ]));
    let executor = PipelineExecutor::new(client(&mock));

    let err = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Pipeline(e) => {
            assert_eq!(e.stage, "scenes");
            assert!(matches!(e.cause().kind(), ScriptoriaErrorKind::Output(_)));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
    assert!(err.to_string().contains("scenes"));
    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn exhausted_ladder_fails_the_first_stage() {
    let mock = MockBackend::new_error(BackendErrorKind::RateLimited(
        "Rate limit reached for model".to_string(),
    ));
    let executor = PipelineExecutor::new(client(&mock));

    let err = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Pipeline(e) => {
            assert_eq!(e.stage, "outline");
            assert!(matches!(e.cause().kind(), ScriptoriaErrorKind::Generation(_)));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
    // One call per model: rate limits are never retried on the same model.
    assert_eq!(mock.models_called(), vec!["primary", "secondary"]);
}

#[tokio::test]
async fn blank_premise_fails_outline_stage() {
    let mock = MockBackend::new_success(OUTLINE);
    let executor = PipelineExecutor::new(client(&mock));

    let err = executor
        .generate(&StoryRequest::new("  ", None))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Pipeline(e) => {
            assert_eq!(e.stage, "outline");
            assert!(matches!(
                e.cause().kind(),
                ScriptoriaErrorKind::Narrative(n) if matches!(n.kind, NarrativeErrorKind::InvalidInput(_))
            ));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn analysis_fills_missing_main_characters() {
    let analysis = OUTLINE.replace(r#"["Mira Chen", "Dana Osei"]"#, "[]");
    let mock = MockBackend::new_sequence(responses(&[
        analysis.as_str(),
        r#"["Mira Chen", "Dana Osei"]"#,
        CHARACTERS,
        SCENES,
        SOUND,
    ]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .analyze(&ScriptRequest::new(SCRIPT, Some("Thriller".to_string())))
        .await
        .unwrap();

    assert_eq!(
        package.outline().main_characters,
        vec!["Mira Chen".to_string(), "Dana Osei".to_string()]
    );
    let calls = mock.calls();
    assert_eq!(calls.len(), 5);
    assert!(calls[0].prompt.user().contains("MIRA CHEN stares at the telemetry."));
    assert!(calls[2].prompt.user().contains("EXACT names: Mira Chen, Dana Osei"));
}

#[tokio::test]
async fn analysis_skips_name_extraction_when_characters_listed() {
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, SCENES, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .analyze(&ScriptRequest::new(SCRIPT, None))
        .await
        .unwrap();

    assert_eq!(package.characters().len(), 2);
    assert_eq!(mock.call_count(), 4);
}

#[tokio::test]
async fn failed_name_extraction_does_not_abort_analysis() {
    let analysis = OUTLINE.replace(r#"["Mira Chen", "Dana Osei"]"#, "[]");
    let mock = MockBackend::new_sequence(responses(&[
        analysis.as_str(),
        "The speaking characters are Mira and Dana.",
        CHARACTERS,
        SCENES,
        SOUND,
    ]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .analyze(&ScriptRequest::new(SCRIPT, None))
        .await
        .unwrap();

    assert!(package.outline().main_characters.is_empty());
    assert_eq!(mock.call_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn deadline_bounds_the_whole_run() {
    let mock = MockBackend::new_error(BackendErrorKind::Http("connection reset".to_string()));
    let ladder = ModelLadder::new(vec!["primary".to_string()], 3)
        .unwrap()
        .with_retry_delay(Duration::from_secs(10));
    let executor = PipelineExecutor::new(ResilientClient::new(Arc::new(mock.clone()), ladder))
        .with_deadline(Duration::from_secs(1));

    let err = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        ScriptoriaErrorKind::Narrative(n)
            if n.kind == NarrativeErrorKind::DeadlineExceeded(Duration::from_secs(1))
    ));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn sub_second_deadline_keeps_its_precision() {
    let mock = MockBackend::new_error(BackendErrorKind::Http("connection reset".to_string()));
    let ladder = ModelLadder::new(vec!["primary".to_string()], 3)
        .unwrap()
        .with_retry_delay(Duration::from_secs(10));
    let executor = PipelineExecutor::new(ResilientClient::new(Arc::new(mock.clone()), ladder))
        .with_deadline(Duration::from_millis(500));

    let err = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        ScriptoriaErrorKind::Narrative(n)
            if n.kind == NarrativeErrorKind::DeadlineExceeded(Duration::from_millis(500))
    ));
    assert!(err.to_string().contains("500ms"), "{err}");
}

#[tokio::test]
async fn string_sound_cues_are_accepted() {
    let sound = r#"{
      "musicTheme": "Minimalist synth",
      "soundEffects": ["Telemetry beeps", {"category": "action", "description": "Klaxon", "scenes": "1, 2"}],
      "ambience": ["Wind over the dome"],
      "keyMoments": [{"scene": "Scene 2", "moment": "Uplink connects", "soundDesign": "Silence"}]
    }"#;
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, SCENES, sound]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();

    let sound = package.sound_design();
    assert_eq!(sound.music_theme.style, "Minimalist synth");
    assert_eq!(sound.sound_effects[0].description, "Telemetry beeps");
    assert!(sound.sound_effects[0].scenes.is_empty());
    assert_eq!(sound.sound_effects[1].scenes, vec![1, 2]);
    assert_eq!(sound.ambience[0].description, "Wind over the dome");
    assert_eq!(sound.key_moments[0].scene, 2);
    assert!(package.integrity_issues().is_empty());
}

#[tokio::test]
async fn null_scene_numbers_do_not_fail_assembly() {
    let scenes = r#"[
      {"sceneNumber": null, "location": "EXT. OBSERVATORY", "characters": ["Mira Chen"], "action": "Mira watches."},
      {"location": "INT. GROUND STATION", "characters": ["Dana Osei"], "action": "Dana types."}
    ]"#;
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, scenes, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();

    assert_eq!(package.scenes().len(), 2);
    assert!(package.scenes().iter().all(|s| s.scene_number == 0));
    assert!(
        package
            .integrity_issues()
            .contains(&IntegrityIssue::UnknownSceneReference(2))
    );
}

#[tokio::test]
async fn object_main_characters_pin_profile_names() {
    let outline = OUTLINE.replace(
        r#"["Mira Chen", "Dana Osei"]"#,
        r#"[{"name": "Mira Chen", "role": "lead"}, {"name": "Dana Osei"}]"#,
    );
    let mock = MockBackend::new_sequence(responses(&[outline.as_str(), CHARACTERS, SCENES, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();

    assert_eq!(
        package.outline().main_characters,
        vec!["Mira Chen".to_string(), "Dana Osei".to_string()]
    );
    assert!(package.integrity_issues().is_empty());
    assert!(mock.calls()[1].prompt.user().contains("EXACT names: Mira Chen, Dana Osei"));
}

#[tokio::test]
async fn keyed_scene_maps_take_their_numbers_from_keys() {
    let scenes = r#"{
      "1": {"location": "EXT. OBSERVATORY", "characters": ["Mira Chen"], "action": "Mira tracks a light."},
      "2": {"location": "INT. GROUND STATION", "characters": ["Mira Chen", "Dana Osei"], "action": "Dana breaks in."}
    }"#;
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, scenes, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();

    let numbers: Vec<u32> = package.scenes().iter().map(|s| s.scene_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(package.scenes()[1].location, "INT. GROUND STATION");
    assert!(package.integrity_issues().is_empty());
    assert!(mock.calls()[3].prompt.user().contains("Valid scene numbers: 1, 2"));
}

#[tokio::test]
async fn prefixed_scene_keys_are_coerced() {
    let scenes = r#"{
      "scene_1": {"location": "EXT. OBSERVATORY", "characters": ["Mira Chen"]},
      "scene_2": {"location": "INT. GROUND STATION", "characters": ["Dana Osei"]}
    }"#;
    let mock = MockBackend::new_sequence(responses(&[OUTLINE, CHARACTERS, scenes, SOUND]));
    let executor = PipelineExecutor::new(client(&mock));

    let package = executor
        .generate(&StoryRequest::new(PREMISE, None))
        .await
        .unwrap();

    let numbers: Vec<u32> = package.scenes().iter().map(|s| s.scene_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}
