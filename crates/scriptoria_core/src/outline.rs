//! Screenplay outline entity.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// One act of the three-act structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Act {
    /// Act heading, e.g. "Act 1: Setup"
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Summary of the act
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Ordered key events
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub key_events: Vec<String>,
}

/// The three named acts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThreeActStructure {
    /// Setup
    #[serde(default, deserialize_with = "lenient::entity")]
    pub act1: Act,
    /// Confrontation
    #[serde(default, deserialize_with = "lenient::entity")]
    pub act2: Act,
    /// Resolution
    #[serde(default, deserialize_with = "lenient::entity")]
    pub act3: Act,
}

impl lenient::Described for Act {
    fn from_description(text: String) -> Self {
        Self {
            description: text,
            ..Self::default()
        }
    }
}

impl ThreeActStructure {
    /// The acts paired with their keys, in order.
    pub fn acts(&self) -> [(&'static str, &Act); 3] {
        [("act1", &self.act1), ("act2", &self.act2), ("act3", &self.act3)]
    }
}

/// Title, logline and act structure for a story.
///
/// # Examples
///
/// ```
/// use scriptoria_core::ScreenplayOutline;
/// use serde_json::json;
///
/// let outline: ScreenplayOutline = serde_json::from_value(json!({
///     "title": "Eclipse Run",
///     "mainCharacters": "Mira Chen, Dana Osei",
///     "threeActStructure": {"act1": {"keyEvents": ["Launch"]}}
/// }))
/// .unwrap();
///
/// assert_eq!(outline.main_characters, vec!["Mira Chen", "Dana Osei"]);
/// assert_eq!(outline.three_act_structure.act1.key_events, vec!["Launch"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenplayOutline {
    /// Working title
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// One-sentence pitch
    #[serde(default, deserialize_with = "lenient::text")]
    pub logline: String,
    /// Genre label
    #[serde(default, deserialize_with = "lenient::text")]
    pub genre: String,
    /// Names of the principal characters, possibly empty
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub main_characters: Vec<String>,
    /// The three acts
    #[serde(default)]
    pub three_act_structure: ThreeActStructure,
    /// Ordered beat-sheet plot points
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub plot_points: Vec<String>,
}
