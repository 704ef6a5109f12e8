//! Sound design entity.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// Score direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MusicTheme {
    /// Musical style of the score
    #[serde(default, deserialize_with = "lenient::text")]
    pub style: String,
    /// Overall emotional tone
    #[serde(default, deserialize_with = "lenient::text")]
    pub mood: String,
    /// Featured instruments
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub instruments: Vec<String>,
    /// Comparable films or composers
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub references: Vec<String>,
}

/// A sound effect cue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SoundEffect {
    /// Environmental, action, emotional...
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    /// What the effect sounds like
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Scene numbers where the cue is used
    #[serde(default, deserialize_with = "lenient::number_list")]
    pub scenes: Vec<u32>,
}

/// Background ambience for a location type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ambience {
    /// Location type
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    /// Ambient sound description
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Emotional quality
    #[serde(default, deserialize_with = "lenient::text")]
    pub mood: String,
}

/// A scene-anchored sound moment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMoment {
    /// Scene number the moment belongs to
    #[serde(default, deserialize_with = "lenient::number")]
    pub scene: u32,
    /// What happens
    #[serde(default, deserialize_with = "lenient::text")]
    pub moment: String,
    /// Sound treatment
    #[serde(default, deserialize_with = "lenient::text")]
    pub sound_design: String,
}

/// Sound design notes for the whole production.
///
/// Cues written as bare strings become entities carrying that text.
///
/// # Examples
///
/// ```
/// use scriptoria_core::SoundDesign;
/// use serde_json::json;
///
/// let sound: SoundDesign = serde_json::from_value(json!({
///     "musicTheme": "Minimalist synth",
///     "soundEffects": ["Telemetry beeps"],
///     "keyMoments": [{"scene": "Scene 2", "moment": "Uplink connects"}]
/// }))
/// .unwrap();
///
/// assert_eq!(sound.music_theme.style, "Minimalist synth");
/// assert_eq!(sound.sound_effects[0].description, "Telemetry beeps");
/// assert_eq!(sound.key_moments[0].scene, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundDesign {
    /// Score direction
    #[serde(default, deserialize_with = "lenient::entity")]
    pub music_theme: MusicTheme,
    /// Effect cues
    #[serde(default, deserialize_with = "lenient::entity_list")]
    pub sound_effects: Vec<SoundEffect>,
    /// Ambience beds
    #[serde(default, deserialize_with = "lenient::entity_list")]
    pub ambience: Vec<Ambience>,
    /// Scene-anchored moments
    #[serde(default, deserialize_with = "lenient::entity_list")]
    pub key_moments: Vec<KeyMoment>,
}

impl lenient::Described for MusicTheme {
    fn from_description(text: String) -> Self {
        Self {
            style: text,
            ..Self::default()
        }
    }
}

impl lenient::Described for SoundEffect {
    fn from_description(text: String) -> Self {
        Self {
            description: text,
            ..Self::default()
        }
    }
}

impl lenient::Described for Ambience {
    fn from_description(text: String) -> Self {
        Self {
            description: text,
            ..Self::default()
        }
    }
}

impl lenient::Described for KeyMoment {
    fn from_description(text: String) -> Self {
        Self {
            moment: text,
            ..Self::default()
        }
    }
}
