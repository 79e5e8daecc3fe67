//! Router configuration for the Formation glue server.
//!
//! Builds the complete Axum router with both function endpoints, the
//! health check, and the shared layers (permissive CORS, correlation IDs,
//! request tracing).

use crate::handlers::{chat, health::health_check, tickets};
use crate::state::AppState;
use axum::{
    Router,
    http::{HeaderName, header},
    routing::{get, post},
};
use formation_web::correlation_id_layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// The CORS policy matches the serverless functions this server replaces:
/// any origin, with the `authorization`, `x-client-info`, `apikey` and
/// `content-type` request headers allowed. The layer also answers the
/// `OPTIONS` preflight on every route.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    let functions = Router::new()
        .route("/chatbot-conversation", post(chat::chatbot_conversation))
        .route(
            "/create-eventbrite-tickets",
            post(tickets::create_eventbrite_tickets),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/functions", functions)
        .layer(cors)
        .layer(correlation_id_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
