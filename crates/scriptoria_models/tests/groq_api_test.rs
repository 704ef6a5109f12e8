use scriptoria_core::{Prompt, ResponseFormat};
use scriptoria_interface::CompletionBackend;
use scriptoria_models::{DEFAULT_TIMEOUT, GROQ_API_KEY_ENV, GROQ_BASE_URL, GroqBackend};

#[test]
fn missing_key_is_config_error() {
    let result = GroqBackend::from_env(
        "SCRIPTORIA_TEST_UNSET_API_KEY",
        GROQ_BASE_URL,
        DEFAULT_TIMEOUT,
    );
    assert!(matches!(
        result.unwrap_err().kind(),
        scriptoria_error::ScriptoriaErrorKind::Config(_)
    ));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_json_completion() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let backend = GroqBackend::from_env(GROQ_API_KEY_ENV, GROQ_BASE_URL, DEFAULT_TIMEOUT)?;
    let prompt = Prompt::builder()
        .user("Return a JSON object with a single key \"title\" naming a short film.")
        .response_format(ResponseFormat::JsonObject)
        .build()?;

    let text = backend.complete("llama-3.1-8b-instant", &prompt).await?;

    assert!(text.contains("title"), "Should mention the requested key");
    println!("Response: {}", text);

    Ok(())
}
