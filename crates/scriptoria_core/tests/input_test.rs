use scriptoria_core::{
    DEFAULT_GENRE, PREMISE_MAX_CHARS, SCRIPT_MIN_CHARS, ScriptRequest, StoryRequest,
};

#[test]
fn premise_of_nineteen_chars_is_rejected() {
    let premise = "a".repeat(19);
    let err = StoryRequest::new(premise, None).validate().unwrap_err();
    assert_eq!(err.field, "premise");
}

#[test]
fn premise_of_twenty_chars_is_accepted() {
    let premise = "a".repeat(20);
    assert!(StoryRequest::new(premise, None).validate().is_ok());
}

#[test]
fn premise_over_limit_is_rejected() {
    let premise = "a".repeat(PREMISE_MAX_CHARS + 1);
    assert!(StoryRequest::new(premise, None).validate().is_err());
}

#[test]
fn premise_length_counts_characters_not_bytes() {
    // 20 characters, 40 bytes
    let premise = "é".repeat(20);
    assert!(StoryRequest::new(premise, None).validate().is_ok());
}

#[test]
fn blank_genre_falls_back_to_default() {
    let request = StoryRequest::new("A lighthouse keeper finds a map", Some("  ".to_string()));
    assert_eq!(request.genre(), DEFAULT_GENRE);

    let request = StoryRequest::new("A lighthouse keeper finds a map", Some("Thriller".into()));
    assert_eq!(request.genre(), "Thriller");
}

#[test]
fn script_is_cleaned_before_validation() {
    let padded = format!("{}\n\n\n", "   x   \n".repeat(SCRIPT_MIN_CHARS));
    let request = ScriptRequest::new(&padded, None);
    assert!(!request.script().contains("  "));
    // 100 "x" lines joined by 99 newlines
    assert_eq!(request.script().chars().count(), SCRIPT_MIN_CHARS * 2 - 1);
    assert!(request.validate().is_ok());
}

#[test]
fn short_script_is_rejected() {
    let request = ScriptRequest::new("INT. LAB - NIGHT", None);
    let err = request.validate().unwrap_err();
    assert_eq!(err.field, "script");
}
