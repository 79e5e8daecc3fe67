//! Event provisioning endpoint.
//!
//! `POST /functions/create-eventbrite-tickets` takes the reservation form
//! payload and runs the three-step provisioning workflow
//! ([`crate::provisioning`]). Success answers
//! `{"success":true,"event":{...}}`; every fatal failure answers
//! `500 {"success":false,"error":"..."}`.

use crate::provisioning::{EventDraft, provision_event};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Request body of the provisioning endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketsRequest {
    /// Event title
    pub event_title: String,
    /// Event description (HTML)
    pub event_description: String,
    /// Session date, `YYYY-MM-DD`
    pub event_date: NaiveDate,
    /// Session start time, `HH:MM`
    pub event_time: String,
    /// Requested capacity; omitted, null and 0 all default to 100
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Success body of the provisioning endpoint.
#[derive(Debug, Serialize)]
pub struct CreateTicketsResponse {
    /// Always `true` on this path
    pub success: bool,
    /// The provisioned event
    pub event: EventSummary,
}

/// Normalized event data returned to the form.
#[derive(Debug, Serialize)]
pub struct EventSummary {
    /// Provider event id
    pub id: String,
    /// Public event page URL
    pub url: String,
    /// Event title
    pub title: String,
    /// Local start time
    pub start: String,
    /// Checkout URL derived from the event id
    pub ticket_url: String,
    /// Provider ticket-class id
    pub ticket_id: String,
}

/// Failure response: `500 {"success":false,"error":"..."}`.
#[derive(Debug)]
pub struct ProvisioningFailure {
    message: String,
}

impl ProvisioningFailure {
    /// Create a failure carrying the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure body shape.
#[derive(Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

impl IntoResponse for ProvisioningFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.message, "Event provisioning failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FailureBody {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Handle a provisioning request.
///
/// # Errors
///
/// Every fatal failure - missing credential, malformed payload, invalid
/// time, or an upstream rejection in steps 1-2 - renders as
/// `500 {"success":false,"error":...}`. A publish failure is not fatal and
/// still yields `{"success":true,...}`.
pub async fn create_eventbrite_tickets(
    State(state): State<AppState>,
    payload: Result<Json<CreateTicketsRequest>, JsonRejection>,
) -> Result<Json<CreateTicketsResponse>, ProvisioningFailure> {
    let Json(request) = payload.map_err(|e| ProvisioningFailure::new(e.to_string()))?;

    let Some(gateway) = state.ticketing.clone() else {
        return Err(ProvisioningFailure::new(
            "EVENTBRITE_API_KEY is not configured",
        ));
    };

    let time = NaiveTime::parse_from_str(&request.event_time, "%H:%M")
        .map_err(|e| ProvisioningFailure::new(format!("Invalid eventTime: {e}")))?;

    let draft = EventDraft {
        title: request.event_title,
        description_html: request.event_description,
        date: request.event_date,
        time,
        capacity: request.capacity,
    };

    tracing::info!(title = %draft.title, date = %draft.date, "Creating event");

    let event = provision_event(gateway.as_ref(), draft)
        .await
        .map_err(|e| ProvisioningFailure::new(e.to_string()))?;

    Ok(Json(CreateTicketsResponse {
        success: true,
        event: EventSummary {
            id: event.event_id,
            url: event.public_url,
            title: event.title,
            start: event.start_local,
            ticket_url: event.ticket_url,
            ticket_id: event.ticket_class_id,
        },
    }))
}
