//! Error types for web handlers.
//!
//! This module defines the error type that bridges between domain errors
//! and HTTP responses, implementing Axum's `IntoResponse` trait. The JSON
//! body matches the shape the Formation endpoints expose:
//! `{"error": "...", "details": "..."}` with `details` omitted when absent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(state: AppState) -> Result<Json<Reply>, AppError> {
///     let client = state.completions.as_ref()
///         .ok_or_else(|| AppError::configuration("Configuration manquante"))?;
///     ...
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing, the `error` body field)
    message: String,
    /// Optional raw detail (the `details` body field)
    details: Option<String>,
    /// Internal error (for logging, not exposed to client)
    #[allow(dead_code)]
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            details: None,
            source: None,
        }
    }

    /// Attach a raw detail string exposed in the `details` body field.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach a source error (logged, never exposed).
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 500 error for a missing credential or other deployment fault.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    /// Create an error propagating an upstream service's status code.
    ///
    /// Unknown status codes collapse to 502.
    #[must_use]
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message.into(),
        )
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    /// The HTTP status this error renders as.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Human-readable error message.
    error: String,
    /// Raw upstream or internal detail, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "Request failed"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    details = ?self.details,
                    "Request failed"
                );
            }
        }

        let body = ErrorResponse {
            error: self.message,
            details: self.details,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("Erreur interne du serveur").with_source(err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::configuration("Configuration manquante");
        assert_eq!(
            err.to_string(),
            "[500 Internal Server Error] Configuration manquante"
        );
    }

    #[test]
    fn test_upstream_keeps_status() {
        let err = AppError::upstream(429, "Erreur du service IA");
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_upstream_invalid_status_becomes_bad_gateway() {
        let err = AppError::upstream(42, "Erreur du service IA");
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_details_serialization() {
        let body = ErrorResponse {
            error: "Erreur du service IA".to_string(),
            details: Some("upstream body".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Erreur du service IA");
        assert_eq!(json["details"], "upstream body");

        let bare = ErrorResponse {
            error: "Configuration manquante".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("details").is_none());
    }
}
