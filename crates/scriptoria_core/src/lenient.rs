//! Forgiving field deserializers for model-authored JSON.
//!
//! Models drift between `"sceneNumber": 3` and `"sceneNumber": "Scene 3"`,
//! emit a comma-joined string where a list was asked for, or write a bare
//! string where an object was expected. These helpers accept the common
//! variants; `null` always means the default. Anything else is rejected.

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer, Error};
use serde_json::Value;

/// An entity that can stand in for a bare description string.
pub(crate) trait Described: Default + DeserializeOwned {
    /// The entity a model meant when it wrote only `text`.
    fn from_description(text: String) -> Self;
}

/// Text from a string, number or boolean; a list of scalars is comma-joined.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| scalar_text(item).map_err(D::Error::custom))
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| parts.join(", ")),
        other => scalar_text(other).map_err(D::Error::custom),
    }
}

fn scalar_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!(
            "expected text, found {}",
            crate::describe_value(&other)
        )),
    }
}

/// A list of text; a bare string is split on commas and record items
/// contribute their `name`.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(split_commas(&s).map(str::to_string).collect()),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Null => {}
                    Value::String(s) => list.push(s),
                    Value::Number(n) => list.push(n.to_string()),
                    Value::Object(record) => match record.get("name") {
                        Some(Value::String(name)) => list.push(name.clone()),
                        _ => {
                            return Err(D::Error::custom(
                                "expected text list item, found record without a name",
                            ));
                        }
                    },
                    other => {
                        return Err(D::Error::custom(format!(
                            "expected text list item, found {}",
                            crate::describe_value(&other)
                        )));
                    }
                }
            }
            Ok(list)
        }
        other => Err(D::Error::custom(format!(
            "expected text list, found {}",
            crate::describe_value(&other)
        ))),
    }
}

/// An unsigned number from a JSON number, a numeric string or a string
/// carrying one number such as `"Scene 2"`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    coerce_number(&value).ok_or_else(|| {
        D::Error::custom(format!(
            "expected number, found {}",
            crate::describe_value(&value)
        ))
    })
}

/// A list of unsigned numbers from an array, a comma-joined string or a
/// single value.
pub(crate) fn number_list<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        Value::String(s) => split_commas(&s)
            .map(|part| Value::String(part.to_string()))
            .collect(),
        single => vec![single],
    };

    items
        .iter()
        .filter(|item| !item.is_null())
        .map(|item| {
            coerce_number(item).ok_or_else(|| {
                D::Error::custom(format!(
                    "expected number list item, found {}",
                    crate::describe_value(item)
                ))
            })
        })
        .collect()
}

/// One entity, or its default for `null`, or a bare description string.
pub(crate) fn entity<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Described,
{
    entity_from_value(Value::deserialize(deserializer)?).map_err(D::Error::custom)
}

/// A list of entities; items may be records or bare description strings,
/// and a single record or string counts as a one-item list.
pub(crate) fn entity_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Described,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        single => vec![single],
    };

    items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(entity_from_value)
        .collect::<Result<_, _>>()
        .map_err(D::Error::custom)
}

fn entity_from_value<T: Described>(value: Value) -> Result<T, String> {
    match value {
        Value::Null => Ok(T::default()),
        Value::String(s) => Ok(T::from_description(s)),
        record @ Value::Object(_) => serde_json::from_value(record).map_err(|e| e.to_string()),
        other => Err(format!(
            "expected record or text, found {}",
            crate::describe_value(&other)
        )),
    }
}

fn split_commas(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|part| !part.is_empty())
}

fn coerce_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| embedded_number(s))
        }
        _ => None,
    }
}

/// The only run of digits in `s`, e.g. `2` in `"Scene 2"`.
fn embedded_number(s: &str) -> Option<u32> {
    let mut runs = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty());
    let run = runs.next()?;
    if runs.next().is_some() {
        return None;
    }
    run.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_number_takes_a_single_run() {
        assert_eq!(embedded_number("Scene 2"), Some(2));
        assert_eq!(embedded_number("scene_12"), Some(12));
        assert_eq!(embedded_number("opening"), None);
        assert_eq!(embedded_number("2 or 3"), None);
    }

    #[test]
    fn numeric_strings_parse_directly() {
        assert_eq!(coerce_number(&Value::String(" 7 ".to_string())), Some(7));
        assert_eq!(coerce_number(&Value::Bool(true)), None);
    }
}
