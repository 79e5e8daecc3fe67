//! Wire types for the Eventbrite v3 API

use serde::{Deserialize, Serialize};

/// Rich text in Eventbrite's multipart format
///
/// Requests carry the `html` side; responses include the rendered `text`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MultipartText {
    /// HTML rendition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text rendition (response only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MultipartText {
    /// Create rich text from an HTML fragment
    #[must_use]
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            text: None,
        }
    }
}

/// A timezone-qualified instant in Eventbrite's datetime format
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatetimeTz {
    /// IANA timezone name (e.g. "Europe/Paris")
    pub timezone: String,
    /// UTC instant, `YYYY-MM-DDThh:mm:ssZ`
    pub utc: String,
    /// Wall-clock time in `timezone` (response only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

impl DatetimeTz {
    /// Create a request-side datetime from a timezone name and UTC instant
    #[must_use]
    pub fn new(timezone: impl Into<String>, utc: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            utc: utc.into(),
            local: None,
        }
    }
}

/// Event attributes sent when creating an event
///
/// Defaults match the Formation free-session profile: EUR, in-person,
/// publicly listed and shareable, remaining capacity visible.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EventPayload {
    /// Event title as rich text
    pub name: MultipartText,
    /// Event description as rich HTML
    pub description: MultipartText,
    /// Start instant
    pub start: DatetimeTz,
    /// End instant
    pub end: DatetimeTz,
    /// ISO currency code
    pub currency: String,
    /// Whether the event is online-only
    pub online_event: bool,
    /// Organizer id ("me" targets the token owner)
    pub organizer_id: String,
    /// Whether the event is publicly listed
    pub listed: bool,
    /// Whether the event page offers share buttons
    pub shareable: bool,
    /// Whether attendance is invite-only
    pub invite_only: bool,
    /// Whether remaining capacity is shown publicly
    pub show_remaining: bool,
    /// Total capacity
    pub capacity: u32,
}

impl EventPayload {
    /// Create an event payload with the Formation defaults
    #[must_use]
    pub fn new(
        title_html: impl Into<String>,
        description_html: impl Into<String>,
        start: DatetimeTz,
        end: DatetimeTz,
    ) -> Self {
        Self {
            name: MultipartText::html(title_html),
            description: MultipartText::html(description_html),
            start,
            end,
            currency: "EUR".to_string(),
            online_event: false,
            organizer_id: "me".to_string(),
            listed: true,
            shareable: true,
            invite_only: false,
            show_remaining: true,
            capacity: 100,
        }
    }

    /// Builder: Set capacity
    #[must_use]
    pub const fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

/// An event as returned by the API
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Event id
    pub id: String,
    /// Public event page URL
    pub url: String,
    /// Event title
    pub name: MultipartText,
    /// Start instant
    pub start: DatetimeTz,
    /// End instant
    #[serde(default)]
    pub end: Option<DatetimeTz>,
}

/// Ticket-class attributes sent when creating a ticket class
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TicketClassPayload {
    /// Ticket tier name
    pub name: String,
    /// Ticket tier description
    pub description: String,
    /// Whether the ticket is free
    pub free: bool,
    /// Total quantity available
    pub quantity_total: u32,
    /// Sales channels ("online", "atd")
    pub sales_channels: Vec<String>,
    /// Delivery methods ("electronic", "will_call")
    pub delivery_methods: Vec<String>,
}

impl TicketClassPayload {
    /// Create a free, online, electronically delivered ticket class
    #[must_use]
    pub fn free(
        name: impl Into<String>,
        description: impl Into<String>,
        quantity_total: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            free: true,
            quantity_total,
            sales_channels: vec!["online".to_string()],
            delivery_methods: vec!["electronic".to_string()],
        }
    }
}

/// A ticket class as returned by the API
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TicketClass {
    /// Ticket class id
    pub id: String,
    /// Ticket tier name
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the ticket is free
    #[serde(default)]
    pub free: bool,
}

/// Result of a publish request
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PublishResult {
    /// Whether the event is now published
    #[serde(default)]
    pub published: bool,
}
