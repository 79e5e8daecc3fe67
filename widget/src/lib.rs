//! Chat widget controller for the Formation landing page.
//!
//! This crate models the floating support chatbot as an explicit state
//! machine driven by a [`Reducer`](formation_core::reducer::Reducer): the
//! message list, the input buffer, and the open/awaiting flags live in
//! [`ChatWidgetState`], and every user interaction is a
//! [`ChatWidgetAction`]. The only side effect the widget performs is the
//! round-trip to the chatbot gateway, expressed as an `Effect::Future`
//! against the [`CompletionGateway`] seam.
//!
//! # State machine
//!
//! ```text
//! Closed ──Opened──► OpenIdle ──Submitted──► OpenAwaitingReply
//!    ▲                  ▲                          │
//!    └────Closed────────┤◄──ReplySucceeded─────────┤
//!                       └◄──ReplyFailed────────────┘
//! ```
//!
//! Submitting while a reply is outstanding is a no-op: at most one request
//! is in flight at a time. Closing the widget does not cancel an in-flight
//! request; its reply is still appended when it arrives.

pub mod actions;
pub mod environment;
pub mod gateway;
pub mod reducer;
#[cfg(test)]
mod tests;
pub mod types;

pub use actions::ChatWidgetAction;
pub use environment::{
    ChatWidgetEnvironment, ProductionChatWidgetEnvironment, UuidIdGenerator,
};
pub use gateway::{CompletionGateway, GatewayError, HttpCompletionGateway, MockCompletionGateway};
pub use reducer::ChatWidgetReducer;
pub use types::{ChatMessage, ChatWidgetState, WidgetPhase};
