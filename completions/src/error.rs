//! Error types for the chat-completions API client

use thiserror::Error;

/// Errors that can occur when interacting with the chat-completions API
#[derive(Debug, Error)]
pub enum CompletionsError {
    /// Missing `OPENAI_API_KEY` environment variable
    #[error("Missing OPENAI_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Rate limited - too many requests
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Unauthorized - invalid API key
    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },
}

impl CompletionsError {
    /// Upstream HTTP status carried by this error, if any
    ///
    /// `RateLimited` and `Unauthorized` map back to their well-known codes;
    /// transport and parse failures carry none.
    #[must_use]
    pub const fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::Unauthorized => Some(401),
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
