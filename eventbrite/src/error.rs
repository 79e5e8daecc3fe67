//! Error types for the Eventbrite API client

use thiserror::Error;

/// Errors that can occur when interacting with the Eventbrite API
#[derive(Debug, Error)]
pub enum EventbriteError {
    /// Missing `EVENTBRITE_API_KEY` environment variable
    #[error("Missing EVENTBRITE_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Unauthorized - invalid API key
    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from API
        message: String,
    },
}

impl EventbriteError {
    /// Raw upstream body for errors that carry one, the display form otherwise
    #[must_use]
    pub fn upstream_body(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
