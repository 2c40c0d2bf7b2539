//! Wire types for the chat-completion API
//!
//! Request and response shapes for `POST {base_url}/chat/completions`.
//! The response side is deliberately lenient: a missing or empty completion
//! is not a deserialization error, it is handled downstream by substituting
//! the fallback reply.

use serde::{Deserialize, Serialize};

/// Request body for a chat completion
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name
    pub model: String,
    /// Always `false`; streaming is out of scope
    pub stream: bool,
    /// System instruction followed by the user message
    pub messages: Vec<RequestMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Completion length cap
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    pub top_p: f64,
}

/// A single message in the request body
#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage {
    /// "system" or "user"
    pub role: String,
    /// Message text
    pub content: String,
}

impl RequestMessage {
    /// Build a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body of a chat completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completions; only the first one is consumed
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The completion message, if any
    pub message: Option<ResponseMessage>,
}

/// Message payload of a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Reply text; may be absent or empty
    #[serde(default)]
    pub content: String,
}

impl ChatCompletionResponse {
    /// Extract the first completion's text, if present and non-empty
    pub fn first_content(&self) -> Option<&str> {
        let content = self
            .choices
            .first()?
            .message
            .as_ref()
            .map(|m| m.content.as_str())?;
        if content.trim().is_empty() {
            None
        } else {
            Some(content)
        }
    }
}
