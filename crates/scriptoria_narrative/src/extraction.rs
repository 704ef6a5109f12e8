//! Utilities for recovering JSON from free-form model output.
//!
//! Model responses often wrap JSON in markdown fences or prose, and carry
//! trailing commas or comments. Extraction is a heuristic, not a parser: it
//! never balances brackets and assumes one top-level array or object.

use regex::Regex;
use scriptoria_error::{OutputError, OutputErrorKind, ScriptoriaResult};
use serde_json::Value;
use std::sync::LazyLock;

/// Leading characters of the candidate kept in `MalformedOutput` diagnostics.
pub const PREVIEW_CHARS: usize = 200;

static FENCED_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").ok());
static TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*([\]}])").ok());
static LINE_COMMENT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"//.*?\n").ok());
static BLOCK_COMMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").ok());

/// Drop control characters below 0x20 except tab, newline and carriage return.
///
/// # Examples
///
/// ```
/// use scriptoria_narrative::strip_control_characters;
///
/// assert_eq!(strip_control_characters("{\u{0}\"a\":\t1}\u{1b}"), "{\"a\":\t1}");
/// ```
pub fn strip_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| (*c as u32) >= 0x20 || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Extract candidate JSON text from a model response.
///
/// Strategies, in order:
/// 1. The interior of the first fenced code block (optionally tagged `json`)
/// 2. From the first `[` or `{` (whichever comes first) to the last matching
///    closing character
/// 3. The trimmed input unchanged
///
/// # Examples
///
/// ```
/// use scriptoria_narrative::extract_json;
///
/// let response = "Here are the scenes:\n```json\n[{\"sceneNumber\": 1}]\n```\nEnjoy!";
/// assert_eq!(extract_json(response), "[{\"sceneNumber\": 1}]");
///
/// let response = "Sure! {\"title\": \"Eclipse\"} Let me know.";
/// assert_eq!(extract_json(response), "{\"title\": \"Eclipse\"}");
/// ```
pub fn extract_json(response: &str) -> String {
    let cleaned = strip_control_characters(response);

    if let Some(interior) = FENCED_BLOCK
        .as_ref()
        .and_then(|re| re.captures(&cleaned))
        .and_then(|caps| caps.get(1))
    {
        return interior.as_str().trim().to_string();
    }

    let start = match (cleaned.find('['), cleaned.find('{')) {
        (Some(bracket), Some(brace)) if bracket < brace => Some((bracket, ']')),
        (Some(bracket), None) => Some((bracket, ']')),
        (_, Some(brace)) => Some((brace, '}')),
        (None, None) => None,
    };

    if let Some((start, close)) = start {
        match cleaned.rfind(close) {
            Some(end) if end > start => return cleaned[start..=end].trim().to_string(),
            _ => {}
        }
    }

    cleaned.trim().to_string()
}

/// Remove commas that directly precede a closing bracket or brace.
///
/// # Examples
///
/// ```
/// use scriptoria_narrative::remove_trailing_commas;
///
/// assert_eq!(remove_trailing_commas("[1, 2, ]"), "[1, 2]");
/// assert_eq!(remove_trailing_commas("{\"a\": 1,\n}"), "{\"a\": 1}");
/// ```
pub fn remove_trailing_commas(candidate: &str) -> String {
    match TRAILING_COMMA.as_ref() {
        Some(re) => re.replace_all(candidate, "$1").into_owned(),
        None => candidate.to_string(),
    }
}

fn strip_comments(candidate: &str) -> String {
    let without_lines = match LINE_COMMENT.as_ref() {
        Some(re) => re.replace_all(candidate, "\n").into_owned(),
        None => candidate.to_string(),
    };
    match BLOCK_COMMENT.as_ref() {
        Some(re) => re.replace_all(&without_lines, "").into_owned(),
        None => without_lines,
    }
}

/// Repair common model mistakes and parse the candidate as JSON.
///
/// Trailing commas are always removed. Comments are only stripped after a
/// strict parse fails, since stripping can corrupt `//` inside strings. When
/// both attempts fail the first parse error is reported.
///
/// # Errors
///
/// Returns `MalformedOutput` when neither attempt parses.
///
/// # Examples
///
/// ```
/// use scriptoria_narrative::repair_and_parse;
/// use serde_json::json;
///
/// let value = repair_and_parse("{\n  // working title\n  \"title\": \"Eclipse\",\n}").unwrap();
/// assert_eq!(value, json!({"title": "Eclipse"}));
/// ```
pub fn repair_and_parse(candidate: &str) -> ScriptoriaResult<Value> {
    let cleaned = remove_trailing_commas(candidate);

    let first_error = match serde_json::from_str(&cleaned) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let very_clean = strip_comments(&cleaned);
    if let Ok(value) = serde_json::from_str(&very_clean) {
        tracing::debug!("Parsed model output after stripping comments");
        return Ok(value);
    }

    tracing::error!(
        candidate_length = candidate.len(),
        error = %first_error,
        "Model output is not parseable JSON"
    );

    Err(OutputError::new(OutputErrorKind::MalformedOutput {
        message: first_error.to_string(),
        preview: candidate.chars().take(PREVIEW_CHARS).collect(),
    })
    .into())
}

/// Extract, repair and parse in one step.
///
/// # Errors
///
/// Returns `MalformedOutput` when no JSON can be recovered.
pub fn parse_model_output(response: &str) -> ScriptoriaResult<Value> {
    repair_and_parse(&extract_json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptoria_error::ScriptoriaErrorKind;
    use serde_json::json;

    #[test]
    fn fenced_block_with_language_tag_returns_trimmed_interior() {
        let response = "Intro text\n```json\n\n  [{\"name\": \"Mira\"}]  \n\n```\ntrailer";
        assert_eq!(extract_json(response), "[{\"name\": \"Mira\"}]");
    }

    #[test]
    fn fenced_block_without_tag() {
        let response = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(response), "{\"a\": 1}");
    }

    #[test]
    fn array_before_object_wins() {
        let response = "Result: [{\"a\": 1}, {\"b\": 2}] done";
        assert_eq!(extract_json(response), "[{\"a\": 1}, {\"b\": 2}]");
    }

    #[test]
    fn object_before_array_wins() {
        let response = "Result: {\"items\": [1, 2]} done";
        assert_eq!(extract_json(response), "{\"items\": [1, 2]}");
    }

    #[test]
    fn does_not_balance_brackets() {
        // Spans to the last brace even though it belongs to later prose
        let response = "{\"a\": 1} and also {oops}";
        assert_eq!(extract_json(response), "{\"a\": 1} and also {oops}");
    }

    #[test]
    fn no_brackets_returns_trimmed_input() {
        assert_eq!(extract_json("  no json here \n"), "no json here");
    }

    #[test]
    fn control_characters_are_removed_before_extraction() {
        let response = "\u{7}{\"a\":\u{0} 1}";
        assert_eq!(extract_json(response), "{\"a\": 1}");
    }

    #[test]
    fn trailing_comma_matches_comma_free_parse() {
        let with_comma = repair_and_parse("{\"a\": [1, 2,], \"b\": {\"c\": 3,},}").unwrap();
        let without = repair_and_parse("{\"a\": [1, 2], \"b\": {\"c\": 3}}").unwrap();
        assert_eq!(with_comma, without);
    }

    #[test]
    fn block_comments_are_stripped_on_retry() {
        let value = repair_and_parse("[/* first */ {\"a\": 1}]").unwrap();
        assert_eq!(value, json!([{"a": 1}]));
    }

    #[test]
    fn url_in_string_survives_first_pass() {
        let value = repair_and_parse("{\"ref\": \"https://example.com\"}").unwrap();
        assert_eq!(value["ref"], "https://example.com");
    }

    #[test]
    fn failure_reports_first_error() {
        let err = repair_and_parse("{\"title\": }").unwrap_err();
        match err.kind() {
            ScriptoriaErrorKind::Output(output) => match &output.kind {
                OutputErrorKind::MalformedOutput { message, preview } => {
                    assert!(message.contains("line 1"));
                    assert_eq!(preview, "{\"title\": }");
                }
                other => panic!("unexpected output kind: {other:?}"),
            },
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn parse_model_output_handles_prose_and_fences() {
        let value = parse_model_output("Sure!\n```json\n{\"title\": \"Eclipse\",}\n```").unwrap();
        assert_eq!(value, json!({"title": "Eclipse"}));
    }
}
