//! Completion backends for Scriptoria.
//!
//! - [`GroqBackend`] talks to Groq through the generic
//!   [`OpenAICompatibleClient`].
//! - `MockBackend` (feature `mock`) replays scripted responses per model and
//!   records every call, for tests that must not touch the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod groq;
#[cfg(feature = "mock")]
mod mock;
mod openai_compat;

pub use groq::{DEFAULT_TIMEOUT, GROQ_API_KEY_ENV, GROQ_BASE_URL, GroqBackend};
#[cfg(feature = "mock")]
pub use mock::{MockBackend, MockBehavior, MockResponse, RecordedCall};
pub use openai_compat::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage,
    OpenAICompatibleClient, ResponseFormatSpec,
};
