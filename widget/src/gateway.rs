//! Gateway seam between the widget and the chatbot endpoint.
//!
//! The widget never talks HTTP directly; it goes through the
//! [`CompletionGateway`] trait so tests can script outcomes. The production
//! implementation POSTs to the Completion Gateway endpoint and maps its
//! `{reply}` / `{error}` bodies.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Gateway call result
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by a gateway call
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request never reached the endpoint or the connection dropped
    #[error("Transport failed: {0}")]
    Transport(String),

    /// The endpoint answered with an error body
    #[error("Assistant error: {0}")]
    Service(String),

    /// The endpoint answered with a body this client cannot interpret
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}

/// Gateway trait
///
/// Abstraction over the chatbot endpoint, so the reducer stays pure and
/// tests can substitute scripted outcomes.
pub trait CompletionGateway: Send + Sync {
    /// Send one user message and resolve to the assistant reply text.
    fn send_message(
        &self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<String>> + Send>>;
}

/// Request body sent to the chatbot endpoint
#[derive(Serialize)]
struct GatewayRequest {
    message: String,
}

/// Response body of the chatbot endpoint
///
/// Success carries `reply`; failure carries `error` (plus optional details
/// this client does not surface).
#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    reply: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Production gateway POSTing to the Completion Gateway endpoint
#[derive(Clone)]
pub struct HttpCompletionGateway {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpCompletionGateway {
    /// Create a gateway targeting the given endpoint URL.
    #[must_use]
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
        }
    }
}

impl CompletionGateway for HttpCompletionGateway {
    fn send_message(
        &self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<String>> + Send>> {
        let client = self.client.clone();
        let url = self.endpoint_url.clone();

        Box::pin(async move {
            let response = client
                .post(&url)
                .json(&GatewayRequest { message })
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            // The endpoint reports failures through the body, so decode it
            // on every status
            let body = response
                .json::<GatewayResponse>()
                .await
                .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

            if let Some(error) = body.error {
                return Err(GatewayError::Service(error));
            }

            body.reply
                .ok_or_else(|| GatewayError::MalformedResponse("missing reply field".to_string()))
        })
    }
}

/// Mock gateway that always succeeds with a fixed reply
///
/// Useful for development and for driving the widget without a server.
#[derive(Clone, Debug)]
pub struct MockCompletionGateway {
    reply: String,
}

impl MockCompletionGateway {
    /// Create a mock gateway answering every message with `reply`.
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared(reply: impl Into<String>) -> Arc<dyn CompletionGateway> {
        Arc::new(Self::new(reply))
    }
}

impl CompletionGateway for MockCompletionGateway {
    fn send_message(
        &self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = GatewayResult<String>> + Send>> {
        let reply = self.reply.clone();
        Box::pin(async move {
            tracing::debug!(message = %message, "Mock gateway answering");
            Ok(reply)
        })
    }
}
