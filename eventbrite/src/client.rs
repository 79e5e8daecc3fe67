//! Eventbrite API client implementation

use crate::{
    error::EventbriteError,
    types::{Event, EventPayload, PublishResult, TicketClass, TicketClassPayload},
};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Request envelope for event creation
#[derive(Serialize)]
struct EventEnvelope<'a> {
    event: &'a EventPayload,
}

/// Request envelope for ticket-class creation
#[derive(Serialize)]
struct TicketClassEnvelope<'a> {
    ticket_class: &'a TicketClassPayload,
}

/// Eventbrite API client
#[derive(Clone)]
pub struct EventbriteClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl EventbriteClient {
    /// Create a new client with API key from environment
    ///
    /// # Errors
    ///
    /// Returns `EventbriteError::MissingApiKey` if `EVENTBRITE_API_KEY` is not set
    pub fn from_env() -> Result<Self, EventbriteError> {
        let api_key =
            std::env::var("EVENTBRITE_API_KEY").map_err(|_| EventbriteError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Create a new client with explicit API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: "https://www.eventbriteapi.com/v3".to_string(),
        }
    }

    /// Override the API base URL (used for tests against a mock server)
    #[must_use]
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Create a draft event
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn create_event(&self, event: EventPayload) -> Result<Event, EventbriteError> {
        let response = self
            .client
            .post(format!("{}/events/", self.api_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&EventEnvelope { event: &event })
            .send()
            .await
            .map_err(|e| EventbriteError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    /// Create a ticket class on an existing event
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn create_ticket_class(
        &self,
        event_id: &str,
        ticket_class: TicketClassPayload,
    ) -> Result<TicketClass, EventbriteError> {
        let response = self
            .client
            .post(format!("{}/events/{event_id}/ticket_classes/", self.api_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&TicketClassEnvelope {
                ticket_class: &ticket_class,
            })
            .send()
            .await
            .map_err(|e| EventbriteError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    /// Publish a draft event, making it publicly visible
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn publish_event(&self, event_id: &str) -> Result<PublishResult, EventbriteError> {
        let response = self
            .client
            .post(format!("{}/events/{event_id}/publish/", self.api_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| EventbriteError::RequestFailed(e.to_string()))?;

        Self::parse(response).await
    }

    /// Map a response to a parsed body or a status-specific error
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, EventbriteError> {
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| EventbriteError::ResponseParseFailed(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(EventbriteError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(EventbriteError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)] // Test code
mod tests {
    use super::*;
    use crate::types::DatetimeTz;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_event() -> EventPayload {
        EventPayload::new(
            "Formation Développement Web & Cybersécurité",
            "<p>Session intensive</p>",
            DatetimeTz::new("Europe/Paris", "2025-09-06T06:00:00Z"),
            DatetimeTz::new("Europe/Paris", "2025-09-06T10:00:00Z"),
        )
    }

    #[test]
    fn test_client_creation() {
        let client = EventbriteClient::new("test-key".to_string());
        assert_eq!(client.api_url, "https://www.eventbriteapi.com/v3");
    }

    #[tokio::test]
    async fn test_create_event_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/events/"))
            .and(bearer_token("test-key"))
            .and(body_partial_json(serde_json::json!({
                "event": {"currency": "EUR", "listed": true}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "987",
                "url": "https://www.eventbrite.com/e/formation-987",
                "name": {"text": "Formation Développement Web & Cybersécurité"},
                "start": {
                    "timezone": "Europe/Paris",
                    "utc": "2025-09-06T06:00:00Z",
                    "local": "2025-09-06T08:00:00"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = EventbriteClient::new("test-key".to_string()).with_api_url(server.uri());

        let event = client.create_event(sample_event()).await.unwrap();
        assert_eq!(event.id, "987");
        assert_eq!(event.start.local.as_deref(), Some("2025-09-06T08:00:00"));
    }

    #[tokio::test]
    async fn test_create_ticket_class_targets_event() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/events/987/ticket_classes/"))
            .and(body_partial_json(serde_json::json!({
                "ticket_class": {"free": true, "quantity_total": 100}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "tc-1",
                "name": "Ticket Gratuit",
                "free": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = EventbriteClient::new("test-key".to_string()).with_api_url(server.uri());

        let ticket = client
            .create_ticket_class("987", TicketClassPayload::free("Ticket Gratuit", "Accès", 100))
            .await
            .unwrap();

        assert_eq!(ticket.id, "tc-1");
        assert!(ticket.free);
    }

    #[tokio::test]
    async fn test_publish_failure_preserves_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/events/987/publish/"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"error":"CANNOT_PUBLISH","error_description":"missing organizer"}"#),
            )
            .mount(&server)
            .await;

        let client = EventbriteClient::new("test-key".to_string()).with_api_url(server.uri());

        let err = client.publish_event("987").await.unwrap_err();
        match err {
            EventbriteError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("CANNOT_PUBLISH"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
