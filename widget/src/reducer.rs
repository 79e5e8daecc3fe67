//! Reducer for the chat widget state machine.

use crate::actions::ChatWidgetAction;
use crate::environment::{ChatWidgetEnvironment, ProductionChatWidgetEnvironment};
use crate::types::{
    CONTACT_FAILED_TOAST, ChatMessage, ChatWidgetState, EMPTY_REPLY_FALLBACK,
    TECHNICAL_DIFFICULTIES_MESSAGE,
};
use formation_core::{effect::Effect, reducer::Reducer};
use smallvec::{SmallVec, smallvec};

/// Reducer driving the chat widget.
///
/// Owns the message list, the input buffer, and the one-outstanding-request
/// guard. The only effect it emits is the gateway round-trip on submit; the
/// gateway outcome is fed back as `ReplySucceeded` / `ReplyFailed`.
#[derive(Clone)]
pub struct ChatWidgetReducer;

impl ChatWidgetReducer {
    /// Create a new chat widget reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ChatWidgetReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for ChatWidgetReducer {
    type State = ChatWidgetState;
    type Action = ChatWidgetAction;
    type Environment = ProductionChatWidgetEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ChatWidgetAction::Opened => {
                state.open = true;
                smallvec![Effect::None]
            },

            ChatWidgetAction::Closed => {
                // Does not cancel an in-flight request; awaiting_reply stays
                state.open = false;
                smallvec![Effect::None]
            },

            ChatWidgetAction::InputChanged { text } => {
                state.input = text;
                smallvec![Effect::None]
            },

            ChatWidgetAction::Submitted => {
                let content = state.input.trim().to_string();

                // At most one outstanding request; blank input is ignored
                if state.awaiting_reply || content.is_empty() {
                    return smallvec![Effect::None];
                }

                state.messages.push(ChatMessage {
                    id: env.ids().next_id(),
                    content: content.clone(),
                    is_from_assistant: false,
                    created_at: env.clock().now(),
                });
                state.input.clear();
                state.toast = None;
                state.awaiting_reply = true;

                let gateway = env.gateway();
                smallvec![Effect::Future(Box::pin(async move {
                    match gateway.send_message(content).await {
                        Ok(reply) => Some(ChatWidgetAction::ReplySucceeded { reply }),
                        Err(e) => Some(ChatWidgetAction::ReplyFailed {
                            message: e.to_string(),
                        }),
                    }
                }))]
            },

            ChatWidgetAction::ReplySucceeded { reply } => {
                state.awaiting_reply = false;

                let content = if reply.trim().is_empty() {
                    EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    reply
                };

                state.messages.push(ChatMessage {
                    id: env.ids().next_id(),
                    content,
                    is_from_assistant: true,
                    created_at: env.clock().now(),
                });
                smallvec![Effect::None]
            },

            ChatWidgetAction::ReplyFailed { message } => {
                tracing::warn!(error = %message, "Assistant request failed");

                state.awaiting_reply = false;
                state.toast = Some(CONTACT_FAILED_TOAST.to_string());
                state.messages.push(ChatMessage {
                    id: env.ids().next_id(),
                    content: TECHNICAL_DIFFICULTIES_MESSAGE.to_string(),
                    is_from_assistant: true,
                    created_at: env.clock().now(),
                });
                smallvec![Effect::None]
            },
        }
    }
}
