//! Prompt text for each stage.

use scriptoria_core::{GenerationProfile, Prompt, PromptBuilderError, ResponseFormat};
use scriptoria_error::{BuilderError, ScriptoriaResult};

/// Scenes summarised for the sound design prompt.
pub(crate) const SOUND_CONTEXT_SCENES: usize = 5;
/// Characters of scene action kept in the sound design prompt.
pub(crate) const SOUND_CONTEXT_ACTION_CHARS: usize = 80;

fn build(
    user: String,
    format: ResponseFormat,
    profile: GenerationProfile,
) -> ScriptoriaResult<Prompt> {
    Prompt::builder()
        .user(user)
        .response_format(format)
        .profile(profile)
        .build()
        .map_err(|e: PromptBuilderError| BuilderError::from(e.to_string()).into())
}

const ACT_SCHEMA: &str = r#"    "threeActStructure": {
        "act1": {
            "title": "Act 1: Setup",
            "description": "Brief description of Act 1",
            "keyEvents": ["Event 1", "Event 2", "Event 3"]
        },
        "act2": {
            "title": "Act 2: Confrontation",
            "description": "Brief description of Act 2",
            "keyEvents": ["Event 1", "Event 2", "Event 3"]
        },
        "act3": {
            "title": "Act 3: Resolution",
            "description": "Brief description of Act 3",
            "keyEvents": ["Event 1", "Event 2", "Event 3"]
        }
    },
    "plotPoints": ["Opening Image", "Catalyst", "Midpoint", "All is Lost", "Climax", "Resolution"]"#;

pub(crate) fn outline(premise: &str, genre: &str) -> ScriptoriaResult<Prompt> {
    let user = format!(
        r#"You are a professional screenplay consultant. Create a compelling screenplay outline based on this story idea.

Story Idea: {premise}
Genre: {genre}

Generate a screenplay outline in the following JSON format. Be creative and detailed:

{{
    "title": "A creative, compelling title for this story",
    "logline": "One powerful sentence that captures the essence of the story",
    "genre": "{genre}",
    "mainCharacters": ["Main character name", "Main character name"],
{ACT_SCHEMA}
}}

Every act must list at least one key event. Return ONLY the JSON object, no additional text."#
    );
    build(user, ResponseFormat::JsonObject, GenerationProfile::CREATIVE)
}

pub(crate) fn analysis(script: &str, genre: &str) -> ScriptoriaResult<Prompt> {
    let user = format!(
        r#"You are a professional script supervisor analyzing screenplay material (full script, treatment, or outline).

SCRIPT/TREATMENT TEXT:
{script}

GENRE: {genre}

INSTRUCTIONS:
- This may be a full screenplay, treatment, outline, or beat sheet
- If character names are provided, use them exactly as written
- If only descriptions are given (like "a detective"), infer appropriate names
- If acts are already labeled (Act I, Act II, Act III), use that structure
- Base all responses on the actual content provided

Return a JSON object with the following format:

{{
    "title": "Extract or infer the title from the script",
    "logline": "A compelling one-sentence logline based on the script",
    "genre": "{genre}",
    "mainCharacters": ["Main character name from the script", "Main character name from the script"],
{ACT_SCHEMA}
}}

Return ONLY the JSON object, no additional text."#
    );
    build(user, ResponseFormat::JsonObject, GenerationProfile::EXTENDED)
}

pub(crate) fn character_names(script: &str) -> ScriptoriaResult<Prompt> {
    let user = format!(
        r#"Analyze this script and extract all speaking character names.

SCRIPT:
{script}

Return a JSON array of character names (3-5 main characters) in order of importance:
["Character Name 1", "Character Name 2", "Character Name 3"]

Return ONLY the JSON array, no additional text."#
    );
    build(user, ResponseFormat::Text, GenerationProfile::CREATIVE)
}

pub(crate) fn characters(
    title: &str,
    logline: &str,
    genre: &str,
    main_characters: &[String],
) -> ScriptoriaResult<Prompt> {
    let cast = if main_characters.is_empty() {
        "Create 3-5 diverse, three-dimensional characters that fit the story.".to_string()
    } else {
        format!(
            "Main Characters: {names}\n\nCreate exactly one profile for each main character, using these EXACT names: {names}\nDo NOT invent additional characters or change the names.",
            names = main_characters.join(", ")
        )
    };

    let user = format!(
        r#"You are a character development expert. Based on this screenplay outline, create compelling character profiles.

Title: {title}
Logline: {logline}
Genre: {genre}

{cast}

Generate character profiles in this JSON format:

[
    {{
        "name": "Character name",
        "role": "Protagonist/Antagonist/Supporting",
        "arc": "Brief description of their character arc",
        "traits": ["Trait 1", "Trait 2", "Trait 3"]
    }}
]

Return ONLY the JSON array, no additional text."#
    );
    build(user, ResponseFormat::Text, GenerationProfile::CREATIVE)
}

pub(crate) fn scenes(
    title: &str,
    logline: &str,
    genre: &str,
    character_names: &[String],
) -> ScriptoriaResult<Prompt> {
    let names = character_names.join(", ");
    let user = format!(
        r#"You are a film production expert. Based on this screenplay outline, create a detailed scene breakdown.

Title: {title}
Logline: {logline}
Genre: {genre}
Characters: {names}

CRITICAL: When listing characters in scenes, you MUST use the EXACT names from the Characters list above: {names}
Do NOT use different names or variations. Only use the names provided.

Generate 8-12 scenes in this JSON format:

[
    {{
        "sceneNumber": 1,
        "location": "Location name (INT/EXT)",
        "timeOfDay": "DAY/NIGHT/MORNING/EVENING",
        "characters": ["EXACT name from Characters list"],
        "action": "Brief description of what happens in this scene",
        "duration": "Estimated minutes"
    }}
]

Create a complete scene breakdown that covers the full story arc. Return ONLY the JSON array, no additional text."#
    );
    build(user, ResponseFormat::Text, GenerationProfile::EXTENDED)
}

pub(crate) fn sound_design(
    title: &str,
    genre: &str,
    scene_summary: &[String],
    scene_numbers: &[String],
) -> ScriptoriaResult<Prompt> {
    let scenes = scene_summary.join("\n");
    let numbers = scene_numbers.join(", ");
    let user = format!(
        r#"You are a professional sound designer for films. Based on this screenplay, create comprehensive sound design suggestions.

Title: {title}
Genre: {genre}

Key Scenes:
{scenes}

Valid scene numbers: {numbers}

Generate sound design in this JSON format:

{{
    "musicTheme": {{
        "style": "Musical style/genre for the score",
        "mood": "Overall emotional tone",
        "instruments": ["instrument1", "instrument2", "instrument3"],
        "references": ["Similar film/composer 1", "Similar film/composer 2"]
    }},
    "soundEffects": [
        {{
            "category": "Category (e.g., Environmental, Action, Emotional)",
            "description": "Specific sound effect description",
            "scenes": [1, 2, 3]
        }}
    ],
    "ambience": [
        {{
            "location": "Location type",
            "description": "Ambient sound description",
            "mood": "Emotional quality"
        }}
    ],
    "keyMoments": [
        {{
            "scene": 1,
            "moment": "Description of key moment",
            "soundDesign": "Specific sound design approach"
        }}
    ]
}}

Only reference valid scene numbers. Return ONLY the JSON object, no additional text."#
    );
    build(user, ResponseFormat::JsonObject, GenerationProfile::CREATIVE)
}
