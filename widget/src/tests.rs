//! Unit tests for the chat widget reducer.
//!
//! These tests verify the full state machine:
//! - Open/close transitions
//! - Input buffering and trimming
//! - Submit guard (one outstanding request, no blank submits)
//! - Reply handling (normal, empty-reply fallback, failure)
//! - Close-while-awaiting behavior

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use super::actions::ChatWidgetAction;
use super::environment::ProductionChatWidgetEnvironment;
use super::gateway::MockCompletionGateway;
use super::reducer::ChatWidgetReducer;
use super::types::{
    CONTACT_FAILED_TOAST, ChatWidgetState, EMPTY_REPLY_FALLBACK, TECHNICAL_DIFFICULTIES_MESSAGE,
    WELCOME_MESSAGE, WidgetPhase,
};
use formation_core::environment::Clock;
use formation_core::reducer::Reducer;
use formation_testing::reducer_test::assertions;
use formation_testing::{ReducerTest, SequentialIdGenerator, test_clock};
use std::sync::Arc;

/// Helper to create a test environment with deterministic clock and ids.
fn test_env() -> ProductionChatWidgetEnvironment {
    ProductionChatWidgetEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
        MockCompletionGateway::shared("Réponse de test"),
    )
}

/// Helper to drive the widget to an open state with a pending request.
fn awaiting_state(
    reducer: &ChatWidgetReducer,
    env: &ProductionChatWidgetEnvironment,
) -> ChatWidgetState {
    let mut state = ChatWidgetState::welcome(env);
    reducer.reduce(&mut state, ChatWidgetAction::Opened, env);
    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "Quel est le programme ?".to_string(),
        },
        env,
    );
    reducer.reduce(&mut state, ChatWidgetAction::Submitted, env);
    assert_eq!(state.phase(), WidgetPhase::OpenAwaitingReply);
    state
}

// ============================================================================
// Session seeding and open/close
// ============================================================================

#[test]
fn welcome_state_seeds_greeting() {
    let env = test_env();
    let state = ChatWidgetState::welcome(&env);

    assert_eq!(state.phase(), WidgetPhase::Closed);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, WELCOME_MESSAGE);
    assert!(state.messages[0].is_from_assistant);
    assert_eq!(state.messages[0].id, "id-1");
}

#[test]
fn open_transitions_to_open_idle() {
    let env = test_env();
    ReducerTest::new(ChatWidgetReducer)
        .with_env(env.clone())
        .given_state(ChatWidgetState::welcome(&env))
        .when_action(ChatWidgetAction::Opened)
        .then_state(|state| {
            assert_eq!(state.phase(), WidgetPhase::OpenIdle);
        })
        .then_effects(|effects| {
            assertions::assert_no_effects(effects);
        })
        .run();
}

#[test]
fn close_returns_to_closed() {
    let env = test_env();
    let mut open_state = ChatWidgetState::welcome(&env);
    open_state.open = true;

    ReducerTest::new(ChatWidgetReducer)
        .with_env(env)
        .given_state(open_state)
        .when_action(ChatWidgetAction::Closed)
        .then_state(|state| {
            assert_eq!(state.phase(), WidgetPhase::Closed);
        })
        .run();
}

#[test]
fn input_changed_updates_buffer() {
    let env = test_env();
    ReducerTest::new(ChatWidgetReducer)
        .with_env(env.clone())
        .given_state(ChatWidgetState::welcome(&env))
        .when_action(ChatWidgetAction::InputChanged {
            text: "Bonjour".to_string(),
        })
        .then_state(|state| {
            assert_eq!(state.input, "Bonjour");
        })
        .then_effects(|effects| {
            assertions::assert_no_effects(effects);
        })
        .run();
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn submit_appends_user_message_and_requests_reply() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = ChatWidgetState::welcome(&env);

    reducer.reduce(&mut state, ChatWidgetAction::Opened, &env);
    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "  Quelle est la durée ?  ".to_string(),
        },
        &env,
    );
    let effects = reducer.reduce(&mut state, ChatWidgetAction::Submitted, &env);

    assert_eq!(state.phase(), WidgetPhase::OpenAwaitingReply);
    assert_eq!(state.messages.len(), 2);

    let user_message = &state.messages[1];
    assert_eq!(user_message.content, "Quelle est la durée ?");
    assert!(!user_message.is_from_assistant);
    assert_eq!(user_message.id, "id-2");
    assert_eq!(user_message.created_at, test_clock().now());

    assert!(state.input.is_empty());
    assertions::assert_effects_count(&effects, 1);
    assertions::assert_has_future_effect(&effects);
}

#[test]
fn submit_with_blank_input_is_noop() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = ChatWidgetState::welcome(&env);

    reducer.reduce(&mut state, ChatWidgetAction::Opened, &env);
    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "   ".to_string(),
        },
        &env,
    );
    let effects = reducer.reduce(&mut state, ChatWidgetAction::Submitted, &env);

    assert_eq!(state.phase(), WidgetPhase::OpenIdle);
    assert_eq!(state.messages.len(), 1);
    assertions::assert_no_effects(&effects);
}

#[test]
fn submit_while_awaiting_is_noop() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);
    let messages_before = state.messages.len();

    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "Encore une question".to_string(),
        },
        &env,
    );
    let effects = reducer.reduce(&mut state, ChatWidgetAction::Submitted, &env);

    assert_eq!(state.messages.len(), messages_before);
    assert_eq!(state.phase(), WidgetPhase::OpenAwaitingReply);
    assertions::assert_no_effects(&effects);
}

// ============================================================================
// Replies
// ============================================================================

#[test]
fn reply_succeeded_appends_assistant_message() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);

    let effects = reducer.reduce(
        &mut state,
        ChatWidgetAction::ReplySucceeded {
            reply: "La formation dure huit semaines.".to_string(),
        },
        &env,
    );

    assert_eq!(state.phase(), WidgetPhase::OpenIdle);
    let last = state.messages.last().unwrap();
    assert!(last.is_from_assistant);
    assert_eq!(last.content, "La formation dure huit semaines.");
    assert!(state.toast.is_none());
    assertions::assert_no_effects(&effects);
}

#[test]
fn empty_reply_uses_fallback_text() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);

    reducer.reduce(
        &mut state,
        ChatWidgetAction::ReplySucceeded {
            reply: String::new(),
        },
        &env,
    );

    let last = state.messages.last().unwrap();
    assert_eq!(last.content, EMPTY_REPLY_FALLBACK);
}

#[test]
fn reply_failed_appends_apology_and_toast() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);

    reducer.reduce(
        &mut state,
        ChatWidgetAction::ReplyFailed {
            message: "Transport failed: connection refused".to_string(),
        },
        &env,
    );

    assert_eq!(state.phase(), WidgetPhase::OpenIdle);
    let last = state.messages.last().unwrap();
    assert!(last.is_from_assistant);
    assert_eq!(last.content, TECHNICAL_DIFFICULTIES_MESSAGE);
    assert_eq!(state.toast.as_deref(), Some(CONTACT_FAILED_TOAST));
}

#[test]
fn next_submit_clears_previous_toast() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);

    reducer.reduce(
        &mut state,
        ChatWidgetAction::ReplyFailed {
            message: "boom".to_string(),
        },
        &env,
    );
    assert!(state.toast.is_some());

    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "Nouvelle tentative".to_string(),
        },
        &env,
    );
    reducer.reduce(&mut state, ChatWidgetAction::Submitted, &env);

    assert!(state.toast.is_none());
}

// ============================================================================
// Close while awaiting
// ============================================================================

#[test]
fn close_while_awaiting_keeps_request_outstanding() {
    let reducer = ChatWidgetReducer;
    let env = test_env();
    let mut state = awaiting_state(&reducer, &env);

    reducer.reduce(&mut state, ChatWidgetAction::Closed, &env);
    assert_eq!(state.phase(), WidgetPhase::Closed);
    assert!(state.awaiting_reply);

    // A submit while closed and awaiting still does nothing
    reducer.reduce(
        &mut state,
        ChatWidgetAction::InputChanged {
            text: "Autre question".to_string(),
        },
        &env,
    );
    let effects = reducer.reduce(&mut state, ChatWidgetAction::Submitted, &env);
    assertions::assert_no_effects(&effects);

    // The late reply is still appended; the widget stays closed
    reducer.reduce(
        &mut state,
        ChatWidgetAction::ReplySucceeded {
            reply: "Réponse tardive".to_string(),
        },
        &env,
    );
    assert_eq!(state.phase(), WidgetPhase::Closed);
    assert!(!state.awaiting_reply);
    assert_eq!(state.messages.last().unwrap().content, "Réponse tardive");
}
