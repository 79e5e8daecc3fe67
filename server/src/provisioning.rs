//! Remote event provisioning workflow.
//!
//! Three sequential, dependent calls against the ticketing API:
//!
//! ```text
//! Init ──create event──► EventCreated ──create ticket class──► TicketCreated
//!   │                        │                                     │
//!   └──► Failed ◄────────────┘                     publish ────────┤
//!                                                  (failure is     ▼
//!                                                   non-fatal)   Done
//! ```
//!
//! The failure policy is asymmetric and deliberate: steps 1-2 abort the
//! whole workflow, step 3 (publish) is logged and swallowed because the
//! event and ticket already exist and are independently useful unpublished.
//! A ticket-class failure leaves the step-1 event behind as an orphaned
//! unpublished draft; there is no compensating deletion. That trade-off is
//! inherited from the production behavior and kept on purpose - revisit as
//! a product decision, not a code fix.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use formation_eventbrite::{
    DatetimeTz, Event, EventPayload, EventbriteClient, EventbriteError, PublishResult,
    TicketClass, TicketClassPayload,
};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Timezone every session is scheduled in.
pub const EVENT_TIMEZONE: Tz = chrono_tz::Europe::Paris;

/// Fixed session length.
pub const EVENT_DURATION_HOURS: i64 = 4;

/// Capacity applied when the draft leaves it unset or zero.
pub const DEFAULT_CAPACITY: u32 = 100;

/// Name of the single free ticket tier.
const FREE_TICKET_NAME: &str =
    "Ticket Gratuit - Formation Développement Web & Cybersécurité";

/// Description of the single free ticket tier.
const FREE_TICKET_DESCRIPTION: &str = "Ticket gratuit pour accéder à notre formation intensive \
     en développement web et cybersécurité";

/// Event metadata collected from the reservation form.
///
/// Consumed once by [`provision_event`]; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Event title
    pub title: String,
    /// Event description as HTML
    pub description_html: String,
    /// Session date
    pub date: NaiveDate,
    /// Session start time, wall-clock in [`EVENT_TIMEZONE`]
    pub time: NaiveTime,
    /// Requested capacity; `None` and `0` both fall back to
    /// [`DEFAULT_CAPACITY`]
    pub capacity: Option<u32>,
}

impl EventDraft {
    /// Effective capacity of the draft.
    #[must_use]
    pub fn capacity_or_default(&self) -> u32 {
        match self.capacity {
            Some(capacity) if capacity > 0 => capacity,
            _ => DEFAULT_CAPACITY,
        }
    }
}

/// Outcome of a completed provisioning run.
///
/// Only constructed once event creation AND ticket-class creation both
/// succeeded. `publish_failed` records the step-3 outcome without
/// invalidating the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedEvent {
    /// Ticketing-provider event id
    pub event_id: String,
    /// Public event page URL
    pub public_url: String,
    /// Provider-reported event title
    pub title: String,
    /// Provider-reported local start time
    pub start_local: String,
    /// Checkout URL, derived deterministically from the event id
    pub ticket_url: String,
    /// Ticketing-provider ticket-class id
    pub ticket_class_id: String,
    /// Whether the publish step failed (the event stays created, unpublished)
    pub publish_failed: bool,
}

/// Fatal provisioning failures.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// Step 1 failed; nothing was created
    #[error("Failed to create event: {0}")]
    EventCreationFailed(String),

    /// Step 2 failed; the step-1 event remains as an orphaned draft
    #[error("Failed to create ticket: {0}")]
    TicketCreationFailed(String),

    /// The requested wall-clock time does not exist in [`EVENT_TIMEZONE`]
    /// (spring DST gap)
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),
}

/// Ticketing gateway trait
///
/// Abstraction over the ticketing provider so the workflow's failure policy
/// can be tested without the network.
pub trait TicketingGateway: Send + Sync {
    /// Create a draft event
    fn create_event(
        &self,
        event: EventPayload,
    ) -> Pin<Box<dyn Future<Output = Result<Event, EventbriteError>> + Send>>;

    /// Create a ticket class on an existing event
    fn create_ticket_class(
        &self,
        event_id: &str,
        ticket_class: TicketClassPayload,
    ) -> Pin<Box<dyn Future<Output = Result<TicketClass, EventbriteError>> + Send>>;

    /// Publish a draft event
    fn publish_event(
        &self,
        event_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<PublishResult, EventbriteError>> + Send>>;
}

impl TicketingGateway for EventbriteClient {
    fn create_event(
        &self,
        event: EventPayload,
    ) -> Pin<Box<dyn Future<Output = Result<Event, EventbriteError>> + Send>> {
        let client = self.clone();
        Box::pin(async move { client.create_event(event).await })
    }

    fn create_ticket_class(
        &self,
        event_id: &str,
        ticket_class: TicketClassPayload,
    ) -> Pin<Box<dyn Future<Output = Result<TicketClass, EventbriteError>> + Send>> {
        let client = self.clone();
        let event_id = event_id.to_string();
        Box::pin(async move { client.create_ticket_class(&event_id, ticket_class).await })
    }

    fn publish_event(
        &self,
        event_id: &str,
    ) -> Pin<Box<dyn Future<Output = Result<PublishResult, EventbriteError>> + Send>> {
        let client = self.clone();
        let event_id = event_id.to_string();
        Box::pin(async move { client.publish_event(&event_id).await })
    }
}

/// Compute the start/end instants for a session.
///
/// The date and time are interpreted as wall-clock in [`EVENT_TIMEZONE`];
/// the end instant is always start + [`EVENT_DURATION_HOURS`]. Ambiguous
/// local times (the autumn fold) resolve to the earlier instant.
///
/// # Errors
///
/// Returns [`ProvisioningError::InvalidStartTime`] when the wall-clock time
/// does not exist (spring DST gap).
pub fn event_schedule(
    date: NaiveDate,
    time: NaiveTime,
) -> Result<(DatetimeTz, DatetimeTz), ProvisioningError> {
    let naive = NaiveDateTime::new(date, time);
    let start = EVENT_TIMEZONE
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| {
            ProvisioningError::InvalidStartTime(format!(
                "{naive} does not exist in {EVENT_TIMEZONE}"
            ))
        })?;
    let end = start + TimeDelta::hours(EVENT_DURATION_HOURS);

    let to_wire = |instant: chrono::DateTime<Tz>| {
        DatetimeTz::new(
            EVENT_TIMEZONE.name(),
            instant
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
        )
    };

    Ok((to_wire(start), to_wire(end)))
}

/// Run the three-step provisioning workflow.
///
/// # Errors
///
/// Returns [`ProvisioningError::EventCreationFailed`] or
/// [`ProvisioningError::TicketCreationFailed`] with the raw upstream body
/// when steps 1-2 fail. A publish failure is NOT an error; it is recorded
/// in [`ProvisionedEvent::publish_failed`].
pub async fn provision_event(
    gateway: &dyn TicketingGateway,
    draft: EventDraft,
) -> Result<ProvisionedEvent, ProvisioningError> {
    let capacity = draft.capacity_or_default();
    let (start, end) = event_schedule(draft.date, draft.time)?;
    let start_fallback = NaiveDateTime::new(draft.date, draft.time)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();

    // Step 1: create the draft event
    let payload = EventPayload::new(draft.title.clone(), draft.description_html, start, end)
        .with_capacity(capacity);

    let event = gateway
        .create_event(payload)
        .await
        .map_err(|e| ProvisioningError::EventCreationFailed(e.upstream_body()))?;

    tracing::info!(event_id = %event.id, "Event created");

    // Step 2: attach the free ticket class
    let ticket = gateway
        .create_ticket_class(
            &event.id,
            TicketClassPayload::free(FREE_TICKET_NAME, FREE_TICKET_DESCRIPTION, capacity),
        )
        .await
        .map_err(|e| ProvisioningError::TicketCreationFailed(e.upstream_body()))?;

    tracing::info!(event_id = %event.id, ticket_class_id = %ticket.id, "Ticket class created");

    // Step 3: publish; failure is non-fatal, the event stays created
    let publish_failed = match gateway.publish_event(&event.id).await {
        Ok(_) => false,
        Err(e) => {
            tracing::warn!(event_id = %event.id, error = %e, "Failed to publish event");
            true
        },
    };

    let ticket_url = format!("https://www.eventbrite.com/e/{}", event.id);

    Ok(ProvisionedEvent {
        ticket_url,
        event_id: event.id,
        public_url: event.url,
        title: event.name.text.unwrap_or(draft.title),
        start_local: event.start.local.unwrap_or(start_fallback),
        ticket_class_id: ticket.id,
        publish_failed,
    })
}
