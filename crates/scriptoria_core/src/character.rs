//! Character profile entity.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// A character in the screenplay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Character name; scenes refer to characters by this
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Protagonist, antagonist, supporting...
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: String,
    /// How the character changes
    #[serde(default, deserialize_with = "lenient::text")]
    pub arc: String,
    /// Defining traits
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub traits: Vec<String>,
}
