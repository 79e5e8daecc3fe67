//! # Eventbrite API Client
//!
//! Rust client library for the Eventbrite v3 API, covering the
//! sub-resources the Formation provisioning workflow touches: events,
//! ticket classes, and publishing.
//!
//! ## Example
//!
//! ```no_run
//! use formation_eventbrite::{DatetimeTz, EventbriteClient, EventPayload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from EVENTBRITE_API_KEY environment variable
//!     let client = EventbriteClient::from_env()?;
//!
//!     let payload = EventPayload::new(
//!         "Formation Développement Web",
//!         "<p>Session intensive</p>",
//!         DatetimeTz::new("Europe/Paris", "2025-09-06T06:00:00Z"),
//!         DatetimeTz::new("Europe/Paris", "2025-09-06T10:00:00Z"),
//!     )
//!     .with_capacity(100);
//!
//!     let event = client.create_event(payload).await?;
//!     println!("Created event {}", event.id);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::EventbriteClient;
pub use error::EventbriteError;
pub use types::{
    DatetimeTz, Event, EventPayload, MultipartText, PublishResult, TicketClass,
    TicketClassPayload,
};
