//! Formation glue server.
//!
//! Two serverless-style endpoints backing the Formation landing page:
//!
//! - `POST /functions/chatbot-conversation` — forwards one visitor message
//!   to the chat-completions API with the fixed assistant persona and
//!   returns the reply ([`handlers::chat`]).
//! - `POST /functions/create-eventbrite-tickets` — provisions a free-ticket
//!   event on Eventbrite through the three-step workflow in
//!   [`provisioning`].
//!
//! Both endpoints are stateless across invocations, answer CORS preflights
//! permissively, and surface missing credentials as per-request
//! configuration faults.

pub mod config;
pub mod handlers;
pub mod provisioning;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
