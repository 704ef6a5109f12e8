//! Conversions between Scriptoria prompts and the OpenAI chat format.

use crate::openai_compat::{ChatMessage, ChatRequest, ChatResponse, ResponseFormatSpec};
use scriptoria_core::{Prompt, ResponseFormat};
use scriptoria_error::{BackendError, BackendErrorKind, BuilderError, ScriptoriaResult};

/// Build a chat request: a system message, a user message, the generation
/// profile, and `response_format` when the prompt forces JSON.
pub fn to_chat_request(prompt: &Prompt, model: &str) -> ScriptoriaResult<ChatRequest> {
    let messages = vec![
        ChatMessage {
            role: "system".to_string(),
            content: prompt.system().clone(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: prompt.user().clone(),
        },
    ];

    let response_format = match prompt.response_format() {
        ResponseFormat::JsonObject => Some(ResponseFormatSpec {
            kind: "json_object".to_string(),
        }),
        ResponseFormat::Text => None,
    };

    let profile = prompt.profile();
    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .max_tokens(Some(profile.max_tokens))
        .temperature(Some(profile.temperature))
        .response_format(response_format)
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build chat request: {}", e)).into())
}

/// Take the first choice's content; a missing or blank completion is an error.
pub fn from_chat_response(response: &ChatResponse) -> ScriptoriaResult<String> {
    let choice = response.choices.first().ok_or_else(|| {
        BackendError::new(BackendErrorKind::ResponseParsing(
            "No choices in response".to_string(),
        ))
    })?;

    if choice.message.content.trim().is_empty() {
        return Err(BackendError::new(BackendErrorKind::EmptyCompletion).into());
    }

    Ok(choice.message.content.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai_compat::ChatChoice;
    use scriptoria_core::GenerationProfile;

    fn prompt(format: ResponseFormat) -> Prompt {
        Prompt::builder()
            .user("Write a logline")
            .response_format(format)
            .profile(GenerationProfile::EXTENDED)
            .build()
            .unwrap()
    }

    #[test]
    fn json_prompt_sets_response_format() {
        let request = to_chat_request(&prompt(ResponseFormat::JsonObject), "llama").unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "llama");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Write a logline");
    }

    #[test]
    fn text_prompt_omits_response_format() {
        let request = to_chat_request(&prompt(ResponseFormat::Text), "llama").unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn blank_completion_is_an_error() {
        let response = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: "  ".to_string(),
                },
                finish_reason: None,
            }],
            usage: None,
        };

        assert!(from_chat_response(&response).is_err());
    }
}
