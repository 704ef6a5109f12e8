//! The assembled production package and its cross-reference checks.

use crate::{CharacterProfile, Scene, ScreenplayOutline, Shape, SoundDesign, StructuredValue};
use chrono::{DateTime, Utc};
use scriptoria_error::{OutputError, OutputErrorKind, ScriptoriaResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A cross-reference inconsistency between parts of a package.
///
/// These are reported, never repaired: the package is still returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IntegrityIssue {
    /// A scene names a character absent from the character list
    #[display("scene {} references unknown character '{}'", scene, name)]
    UnknownSceneCharacter {
        /// Scene number
        scene: u32,
        /// Name as written in the scene
        name: String,
    },
    /// A character profile is not among the outline's main characters
    #[display("character '{}' is not a main character of the outline", _0)]
    UnlistedCharacter(String),
    /// Sound design references a scene number that does not exist
    #[display("sound design references missing scene {}", _0)]
    UnknownSceneReference(u32),
}

/// Everything produced for one story premise.
///
/// Serializes with the outline under the `screenplay` key so the output
/// document reads `{screenplay, characters, scenes, soundDesign, generatedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPackage {
    /// Title, logline and acts
    #[serde(rename = "screenplay")]
    outline: ScreenplayOutline,
    /// Character profiles
    characters: Vec<CharacterProfile>,
    /// Scene breakdown
    scenes: Vec<Scene>,
    /// Sound design notes
    sound_design: SoundDesign,
    /// When the package was assembled
    generated_at: DateTime<Utc>,
}

impl ProductionPackage {
    /// Build a package from already-typed parts, stamping the current time.
    pub fn new(
        outline: ScreenplayOutline,
        characters: Vec<CharacterProfile>,
        scenes: Vec<Scene>,
        sound_design: SoundDesign,
    ) -> Self {
        Self {
            outline,
            characters,
            scenes,
            sound_design,
            generated_at: Utc::now(),
        }
    }

    /// Assemble a package from the normalized output of each stage.
    ///
    /// Fails with `UnexpectedShape` when a part has the wrong shape or its
    /// fields cannot be coerced into the typed entity.
    pub fn from_structured(
        outline: &StructuredValue,
        characters: &StructuredValue,
        scenes: &StructuredValue,
        sound_design: &StructuredValue,
    ) -> ScriptoriaResult<Self> {
        Ok(Self::new(
            typed(outline, Shape::Record, "outline")?,
            typed(characters, Shape::RecordList, "characters")?,
            typed(scenes, Shape::RecordList, "scenes")?,
            typed(sound_design, Shape::Record, "sound design")?,
        ))
    }

    /// Check that scenes, characters and sound cues refer to each other consistently.
    ///
    /// Names compare case-insensitively after trimming. Profiles are only
    /// checked against the outline when it lists main characters.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let known: HashSet<String> = self
            .characters
            .iter()
            .map(|c| normalize_name(&c.name))
            .filter(|n| !n.is_empty())
            .collect();
        let mut issues = Vec::new();

        for scene in &self.scenes {
            for name in &scene.characters {
                let key = normalize_name(name);
                if !key.is_empty() && !known.contains(&key) {
                    issues.push(IntegrityIssue::UnknownSceneCharacter {
                        scene: scene.scene_number,
                        name: name.trim().to_string(),
                    });
                }
            }
        }

        let main: HashSet<String> = self
            .outline
            .main_characters
            .iter()
            .map(|n| normalize_name(n))
            .filter(|n| !n.is_empty())
            .collect();
        if !main.is_empty() {
            for profile in &self.characters {
                let key = normalize_name(&profile.name);
                if !key.is_empty() && !main.contains(&key) {
                    issues.push(IntegrityIssue::UnlistedCharacter(profile.name.trim().to_string()));
                }
            }
        }

        let scene_numbers: HashSet<u32> = self.scenes.iter().map(|s| s.scene_number).collect();
        let mut referenced: Vec<u32> = self
            .sound_design
            .sound_effects
            .iter()
            .flat_map(|effect| effect.scenes.iter().copied())
            .chain(self.sound_design.key_moments.iter().map(|m| m.scene))
            .filter(|n| !scene_numbers.contains(n))
            .collect();
        referenced.sort_unstable();
        referenced.dedup();
        issues.extend(referenced.into_iter().map(IntegrityIssue::UnknownSceneReference));

        issues
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn typed<T: DeserializeOwned>(
    value: &StructuredValue,
    expected: Shape,
    part: &str,
) -> ScriptoriaResult<T> {
    if value.shape() != expected {
        return Err(OutputError::new(OutputErrorKind::UnexpectedShape {
            expected: format!("{} for {}", expected, part),
            found: value.describe(),
        })
        .into());
    }
    serde_json::from_value(value.clone().into_value()).map_err(|e| {
        OutputError::new(OutputErrorKind::UnexpectedShape {
            expected: format!("{} {}", part, expected),
            found: e.to_string(),
        })
        .into()
    })
}
