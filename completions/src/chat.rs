//! Chat-completions API request and response types

use crate::types::{Message, Role, Usage};
use serde::{Deserialize, Serialize};

/// Default model used by the Formation chatbot gateway
pub const DEFAULT_MODEL: &str = "gpt-5-mini-2025-08-07";

/// Request to create a chat completion
#[derive(Clone, Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model to use (e.g., "gpt-5-mini-2025-08-07")
    pub model: String,
    /// Conversation turns (system instruction included as the first message)
    pub messages: Vec<Message>,
    /// Maximum tokens to generate
    pub max_completion_tokens: u32,
    /// Whether to stream the response
    #[serde(default)]
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Create a basic request with the gateway defaults
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages,
            max_completion_tokens: 500,
            stream: false,
        }
    }

    /// Builder: Set model
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Builder: Set max completion tokens
    #[must_use]
    pub const fn with_max_completion_tokens(mut self, max_completion_tokens: u32) -> Self {
        self.max_completion_tokens = max_completion_tokens;
        self
    }
}

/// Response from creating a chat completion
#[derive(Clone, Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique identifier for this completion
    pub id: String,
    /// Model that generated the response
    pub model: String,
    /// Generated choices (the gateway only ever requests one)
    pub choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    pub usage: Usage,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the API returned one
    #[must_use]
    pub fn reply_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// A single generated completion
#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    /// Index of this choice
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
    /// Why generation stopped ("stop", "length", ...)
    pub finish_reason: Option<String>,
}

/// Message payload of a choice
#[derive(Clone, Debug, Deserialize)]
pub struct ChoiceMessage {
    /// Role (always "assistant" for responses)
    pub role: Role,
    /// Generated text
    #[serde(default)]
    pub content: String,
}
