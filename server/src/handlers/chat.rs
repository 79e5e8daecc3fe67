//! Chatbot conversation endpoint.
//!
//! `POST /functions/chatbot-conversation` with `{"message": "..."}` forwards
//! one visitor message to the chat-completions API under the fixed French
//! assistant persona and returns `{"reply": "..."}`. Each call is a
//! stateless single turn; no conversation history is kept server-side.

use crate::state::AppState;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use formation_completions::{ChatCompletionRequest, CompletionsError, Message};
use formation_web::AppError;
use serde::{Deserialize, Serialize};

/// Fixed assistant persona: domain-restricted to the training program,
/// always answering in French.
pub const SYSTEM_PROMPT: &str = "Tu es un assistant spécialisé dans les formations en \
     développement web et hacking éthique. \n\
     Tu dois répondre aux questions des visiteurs sur cette formation intensive qui couvre :\n\
     - Développement Web (HTML, CSS, JavaScript, React, Node.js)\n\
     - Hacking Éthique et Cybersécurité\n\
     - Places limitées pour une formation intensive\n\
     - Formation pratique avec projets réels\n\
     \n\
     Réponds toujours en français de manière professionnelle et utile. \n\
     Si on te pose une question qui n'est pas liée à la formation, redirige poliment vers le \
     sujet de la formation.";

/// Request body of the chatbot endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Visitor message
    pub message: String,
}

/// Response body of the chatbot endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Assistant reply text
    pub reply: String,
}

/// Handle one chatbot conversation turn.
///
/// # Errors
///
/// - Missing `OPENAI_API_KEY` → 500 `{"error":"Configuration manquante"}`
///   without any upstream call
/// - Upstream non-2xx → the upstream status code,
///   `{"error":"Erreur du service IA","details":<raw body>}`
/// - Anything else (including malformed request JSON) → 500
///   `{"error":"Erreur interne du serveur","details":<message>}`
pub async fn chatbot_conversation(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        AppError::internal("Erreur interne du serveur").with_details(e.to_string())
    })?;

    let Some(client) = state.completions.as_ref() else {
        tracing::error!("OPENAI_API_KEY not found");
        return Err(AppError::configuration("Configuration manquante"));
    };

    tracing::info!(message = %request.message, "Received message");

    let completion_request = ChatCompletionRequest::new(vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(request.message),
    ])
    .with_model(state.config.completions.model.clone())
    .with_max_completion_tokens(state.config.completions.max_completion_tokens);

    let response = client
        .chat_completion(completion_request)
        .await
        .map_err(map_completions_error)?;

    let reply = response.reply_text().ok_or_else(|| {
        AppError::internal("Erreur interne du serveur").with_details("empty completion response")
    })?;

    Ok(Json(ChatResponse {
        reply: reply.to_string(),
    }))
}

/// Map an upstream client error to the endpoint's error shape.
///
/// Upstream HTTP errors propagate their status code and raw body; transport
/// and parse failures collapse to the internal error.
fn map_completions_error(error: CompletionsError) -> AppError {
    tracing::error!(error = %error, "Chat-completions API error");

    match error {
        CompletionsError::ApiError { status, message } => {
            AppError::upstream(status, "Erreur du service IA").with_details(message)
        },
        other => match other.upstream_status() {
            Some(status) => {
                AppError::upstream(status, "Erreur du service IA").with_details(other.to_string())
            },
            None => AppError::internal("Erreur interne du serveur").with_details(other.to_string()),
        },
    }
}
