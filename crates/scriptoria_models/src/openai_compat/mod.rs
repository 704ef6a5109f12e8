//! Generic OpenAI-compatible chat completions client.
//!
//! Groq speaks this format; other providers that do can reuse the client
//! with a different base URL.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage, ResponseFormatSpec};
