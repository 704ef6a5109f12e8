//! Scene breakdown entity.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// One scene of the breakdown.
///
/// # Examples
///
/// ```
/// use scriptoria_core::Scene;
/// use serde_json::json;
///
/// let scene: Scene = serde_json::from_value(json!({
///     "sceneNumber": "4",
///     "location": "INT. MISSION CONTROL",
///     "duration": 3
/// }))
/// .unwrap();
///
/// assert_eq!(scene.scene_number, 4);
/// assert_eq!(scene.duration, "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Position in the breakdown, starting at 1
    #[serde(default, deserialize_with = "lenient::number")]
    pub scene_number: u32,
    /// Slug-line location (INT/EXT)
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    /// DAY, NIGHT, ...
    #[serde(default, deserialize_with = "lenient::text")]
    pub time_of_day: String,
    /// Names of characters present; drawn from the character list
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub characters: Vec<String>,
    /// What happens
    #[serde(default, deserialize_with = "lenient::text")]
    pub action: String,
    /// Estimated running time in minutes
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
}
