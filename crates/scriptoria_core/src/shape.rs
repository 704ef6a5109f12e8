//! Expected response shapes and the tagged structured value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON object: an ordered mapping of named fields.
pub type Record = serde_json::Map<String, Value>;

/// The shape a stage expects its parsed output to have.
///
/// # Examples
///
/// ```
/// use scriptoria_core::Shape;
///
/// assert_eq!(format!("{}", Shape::RecordList), "record list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Shape {
    /// A single JSON object
    #[strum(serialize = "record")]
    Record,
    /// A JSON array of objects
    #[strum(serialize = "record list")]
    RecordList,
}

/// Parsed model output that conforms to one of the two expected shapes.
///
/// # Examples
///
/// ```
/// use scriptoria_core::{Shape, StructuredValue};
/// use serde_json::json;
///
/// let value: StructuredValue = serde_json::from_value(json!([{"name": "Mira"}])).unwrap();
/// assert_eq!(value.shape(), Shape::RecordList);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuredValue {
    /// A single record
    Record(Record),
    /// A sequence of records
    RecordList(Vec<Record>),
}

impl StructuredValue {
    /// The shape of this value.
    pub fn shape(&self) -> Shape {
        match self {
            StructuredValue::Record(_) => Shape::Record,
            StructuredValue::RecordList(_) => Shape::RecordList,
        }
    }

    /// Borrow the record, if this is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            StructuredValue::Record(record) => Some(record),
            StructuredValue::RecordList(_) => None,
        }
    }

    /// Borrow the records, if this is a list.
    pub fn as_record_list(&self) -> Option<&[Record]> {
        match self {
            StructuredValue::Record(_) => None,
            StructuredValue::RecordList(records) => Some(records),
        }
    }

    /// Convert back into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            StructuredValue::Record(record) => Value::Object(record),
            StructuredValue::RecordList(records) => {
                Value::Array(records.into_iter().map(Value::Object).collect())
            }
        }
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            StructuredValue::Record(record) => describe_record(record),
            StructuredValue::RecordList(records) => format!("record list of {}", records.len()),
        }
    }
}

/// Describe the runtime type of a JSON value for error messages.
///
/// # Examples
///
/// ```
/// use scriptoria_core::describe_value;
/// use serde_json::json;
///
/// assert_eq!(describe_value(&json!([1, 2])), "array of 2");
/// assert_eq!(describe_value(&json!({"a": 1, "b": 2})), "record with keys [a, b]");
/// ```
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(record) => describe_record(record),
    }
}

fn describe_record(record: &Record) -> String {
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    format!("record with keys [{}]", keys.join(", "))
}
