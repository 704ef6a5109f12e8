//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use scriptoria_models::MockBackend;
use scriptoria_rate_limit::{ModelLadder, ResilientClient};
use std::sync::Arc;

pub const PREMISE: &str = "A retired astronaut must stop a rogue satellite from crashing into her hometown before the final eclipse.";

pub const OUTLINE: &str = r#"{
  "title": "Final Eclipse",
  "logline": "A retired astronaut races a falling satellite to save her hometown.",
  "genre": "Thriller",
  "mainCharacters": ["Mira Chen", "Dana Osei"],
  "threeActStructure": {
    "act1": {"title": "Signal", "description": "Mira spots the satellite drifting.", "keyEvents": ["Mira sees the debris track"]},
    "act2": {"title": "Descent", "description": "The orbit decays faster than expected.", "keyEvents": ["Dana hacks the uplink", "The first burn fails"]},
    "act3": {"title": "Totality", "description": "Mira steers it into the sea.", "keyEvents": ["Eclipse begins"]}
  },
  "plotPoints": ["Inciting signal", "Midpoint failure", "Final burn"]
}"#;

pub const CHARACTERS: &str = r#"Here are the profiles:
```json
[
  {"name": "Mira Chen", "role": "protagonist", "arc": "From recluse to leader", "traits": ["stubborn", "brilliant"]},
  {"name": "Dana Osei", "role": "supporting", "arc": "Learns to trust Mira", "traits": "loyal, wry"},
]
```"#;

pub const SCENES: &str = r#"{"scenes": [
  {"sceneNumber": 1, "location": "EXT. OBSERVATORY", "timeOfDay": "NIGHT", "characters": ["Mira Chen"], "action": "Mira tracks a light moving the wrong way.", "duration": "3"},
  {"sceneNumber": "2", "location": "INT. GROUND STATION", "timeOfDay": "DAY", "characters": ["Mira Chen", "Dana Osei"], "action": "Dana breaks into the uplink.", "duration": 4}
]}"#;

pub const SOUND: &str = r#"{
  "musicTheme": {"style": "Minimalist synth", "mood": "Tense", "instruments": ["synth", "cello"], "references": ["Gravity"]},
  "soundEffects": [{"category": "action", "description": "Telemetry beeps", "scenes": [1, 2]}],
  "ambience": [{"location": "Observatory", "description": "Wind over the dome", "mood": "Lonely"}],
  "keyMoments": [{"scene": 2, "moment": "Uplink connects", "soundDesign": "Music drops to silence"}]
}"#;

/// Client over `mock` with a two-model ladder and two attempts per model.
pub fn client(mock: &MockBackend) -> ResilientClient {
    let ladder = ModelLadder::new(vec!["primary".to_string(), "secondary".to_string()], 2)
        .expect("valid ladder");
    ResilientClient::new(Arc::new(mock.clone()), ladder)
}
