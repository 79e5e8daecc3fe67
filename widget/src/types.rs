//! Core types for the chat widget controller.

use crate::environment::ChatWidgetEnvironment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting seeded as the first assistant message of every widget session.
pub const WELCOME_MESSAGE: &str = "Bonjour ! Je suis votre assistant pour répondre à toutes vos \
     questions sur notre formation en développement web et hacking éthique. Comment puis-je vous \
     aider ?";

/// Assistant text substituted when the gateway returns an empty reply.
pub const EMPTY_REPLY_FALLBACK: &str = "Désolé, je n'ai pas pu traiter votre demande.";

/// Assistant text appended when the gateway call fails.
pub const TECHNICAL_DIFFICULTIES_MESSAGE: &str = "Désolé, je rencontre des difficultés \
     techniques. Veuillez réessayer dans quelques instants.";

/// Transient notification shown when the gateway call fails.
pub const CONTACT_FAILED_TOAST: &str =
    "Impossible de contacter l'assistant. Veuillez réessayer.";

/// A single message in the widget conversation.
///
/// Messages are append-only and never mutated after creation. The list is
/// discarded with the widget session; nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Opaque message id
    pub id: String,
    /// Message text
    pub content: String,
    /// Whether the assistant authored this message
    pub is_from_assistant: bool,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

/// Observable phase of the widget state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Widget hidden behind the floating button
    Closed,
    /// Widget open and ready for input
    OpenIdle,
    /// Widget open with one request outstanding
    OpenAwaitingReply,
}

/// State of the chat widget.
///
/// `open` and `awaiting_reply` are tracked independently: the user may close
/// the window while a request is in flight, and the reply is still appended
/// when it arrives. [`ChatWidgetState::phase`] projects the two flags onto
/// the three observable phases.
#[derive(Clone, Debug, Default)]
pub struct ChatWidgetState {
    /// Whether the chat window is open
    pub open: bool,
    /// Whether a gateway request is outstanding
    pub awaiting_reply: bool,
    /// Buffered input field contents
    pub input: String,
    /// Conversation so far, oldest first
    pub messages: Vec<ChatMessage>,
    /// Transient user-visible notification, set on gateway failure
    pub toast: Option<String>,
}

impl ChatWidgetState {
    /// Create the initial session state, seeded with the assistant greeting.
    #[must_use]
    pub fn welcome<E: ChatWidgetEnvironment>(env: &E) -> Self {
        Self {
            open: false,
            awaiting_reply: false,
            input: String::new(),
            messages: vec![ChatMessage {
                id: env.ids().next_id(),
                content: WELCOME_MESSAGE.to_string(),
                is_from_assistant: true,
                created_at: env.clock().now(),
            }],
            toast: None,
        }
    }

    /// The observable phase of the state machine.
    #[must_use]
    pub const fn phase(&self) -> WidgetPhase {
        if !self.open {
            WidgetPhase::Closed
        } else if self.awaiting_reply {
            WidgetPhase::OpenAwaitingReply
        } else {
            WidgetPhase::OpenIdle
        }
    }
}
