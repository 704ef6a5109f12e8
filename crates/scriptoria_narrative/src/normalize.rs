//! Coercion of parsed model output into the shape a stage expects.
//!
//! Models often wrap a requested array in an object, rename the array key,
//! or return a map of id to entity. For list-shaped stages the normalizer
//! tries an ordered chain of pure extractors against a record and takes the
//! first that matches. Record-shaped stages are never unwrapped from arrays.

use scriptoria_core::{Record, Shape, StructuredValue, describe_value};
use scriptoria_error::{OutputError, OutputErrorKind, ScriptoriaResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Generic wrapper keys tried after any entity-specific ones.
const GENERIC_WRAPPER_KEYS: &[&str] = &["data", "result", "list", "items"];

/// Stage-specific knowledge used by the list extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeHints {
    /// Keys that conventionally wrap the list, in priority order
    pub wrapper_keys: &'static [&'static str],
    /// Fields an item plausibly carries; used to recognise id-to-entity maps
    pub item_fields: &'static [&'static str],
    /// Field that receives the map key when materialising an id-to-entity map
    pub id_field: Option<&'static str>,
}

impl ShapeHints {
    /// Only the generic wrapper keys; no entity recognition.
    pub const GENERIC: Self = Self {
        wrapper_keys: GENERIC_WRAPPER_KEYS,
        item_fields: &[],
        id_field: None,
    };

    /// Character profile lists.
    pub const CHARACTERS: Self = Self {
        wrapper_keys: &[
            "characters",
            "characterProfiles",
            "character_profiles",
            "profiles",
            "cast",
            "data",
            "result",
            "list",
            "items",
        ],
        item_fields: &["name", "role", "arc", "traits"],
        id_field: Some("name"),
    };

    /// Scene breakdown lists.
    pub const SCENES: Self = Self {
        wrapper_keys: &[
            "scenes",
            "breakdown",
            "scene_breakdown",
            "sceneBreakdown",
            "scene_list",
            "sceneList",
            "data",
            "result",
            "list",
            "items",
        ],
        item_fields: &[
            "sceneNumber",
            "location",
            "timeOfDay",
            "characters",
            "action",
            "duration",
        ],
        id_field: Some("sceneNumber"),
    };
}

impl Default for ShapeHints {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// A pure candidate-shape extractor: recovers a record list from a record, or declines.
pub type ListExtractor = fn(&Record, &ShapeHints) -> Option<Vec<Record>>;

/// The extractors tried for list-shaped stages, in priority order.
pub const LIST_EXTRACTORS: [(&str, ListExtractor); 4] = [
    ("wrapper_key", from_wrapper_key),
    ("single_array", from_single_array),
    ("longest_array", from_longest_array),
    ("keyed_records", from_keyed_records),
];

/// An array whose every element is a record.
fn record_array(value: &Value) -> Option<Vec<Record>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_object().cloned())
        .collect()
}

fn record_arrays(record: &Record) -> Vec<Vec<Record>> {
    record.values().filter_map(record_array).collect()
}

/// The first wrapper key, in priority order, whose value is a record array.
pub fn from_wrapper_key(record: &Record, hints: &ShapeHints) -> Option<Vec<Record>> {
    hints
        .wrapper_keys
        .iter()
        .find_map(|key| record.get(*key).and_then(record_array))
}

/// The only record array among the top-level values.
pub fn from_single_array(record: &Record, _hints: &ShapeHints) -> Option<Vec<Record>> {
    let mut arrays = record_arrays(record);
    if arrays.len() == 1 { arrays.pop() } else { None }
}

/// The longest of several record arrays; the earliest wins a tie.
pub fn from_longest_array(record: &Record, _hints: &ShapeHints) -> Option<Vec<Record>> {
    let arrays = record_arrays(record);
    if arrays.len() < 2 {
        return None;
    }
    arrays.into_iter().fold(None, |best: Option<Vec<Record>>, candidate| match best {
        Some(current) if current.len() >= candidate.len() => Some(current),
        _ => Some(candidate),
    })
}

/// A map of identifier to entity, materialised in key order.
///
/// Every value must be a record carrying at least one expected item field.
/// The key is injected as the id field when the entity lacks one, as a
/// number when it parses as one.
pub fn from_keyed_records(record: &Record, hints: &ShapeHints) -> Option<Vec<Record>> {
    if record.is_empty() || hints.item_fields.is_empty() {
        return None;
    }

    record
        .iter()
        .map(|(key, value)| {
            let entity = value.as_object()?;
            if !hints.item_fields.iter().any(|f| entity.contains_key(*f)) {
                return None;
            }
            let mut entity = entity.clone();
            if let Some(id_field) = hints.id_field {
                entity
                    .entry(id_field.to_string())
                    .or_insert_with(|| key_as_id(key));
            }
            Some(entity)
        })
        .collect()
}

/// A numeric map key becomes a number so it coerces like any other id.
fn key_as_id(key: &str) -> Value {
    match key.trim().parse::<u64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(key.to_string()),
    }
}

fn unexpected(expected: Shape, value: &Value) -> scriptoria_error::ScriptoriaError {
    OutputError::new(OutputErrorKind::UnexpectedShape {
        expected: expected.to_string(),
        found: describe_value(value),
    })
    .into()
}

/// Coerce a parsed value into `expected`.
///
/// Values already in the expected shape pass through unchanged, so
/// normalising twice gives the same result as normalising once.
///
/// # Errors
///
/// Returns `UnexpectedShape` when no extractor applies.
///
/// # Examples
///
/// ```
/// use scriptoria_core::Shape;
/// use scriptoria_narrative::{ShapeHints, normalize};
/// use serde_json::json;
///
/// let wrapped = json!({"characters": [{"name": "Mira Chen"}], "count": 1});
/// let list = normalize(wrapped, Shape::RecordList, &ShapeHints::CHARACTERS).unwrap();
/// assert_eq!(list.as_record_list().map(|l| l.len()), Some(1));
/// ```
pub fn normalize(value: Value, expected: Shape, hints: &ShapeHints) -> ScriptoriaResult<StructuredValue> {
    match (expected, value) {
        (Shape::Record, Value::Object(record)) => Ok(StructuredValue::Record(record)),
        (Shape::RecordList, Value::Array(items)) => {
            let value = Value::Array(items);
            record_array(&value)
                .map(StructuredValue::RecordList)
                .ok_or_else(|| unexpected(expected, &value))
        }
        (Shape::RecordList, Value::Object(record)) => {
            for (name, extractor) in LIST_EXTRACTORS {
                if let Some(records) = extractor(&record, hints) {
                    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
                    warn!(
                        heuristic = name,
                        keys = ?keys,
                        items = records.len(),
                        "Recovered record list from wrapping record"
                    );
                    return Ok(StructuredValue::RecordList(records));
                }
            }
            debug!("No list extractor matched");
            Err(unexpected(expected, &Value::Object(record)))
        }
        (expected, other) => Err(unexpected(expected, &other)),
    }
}
