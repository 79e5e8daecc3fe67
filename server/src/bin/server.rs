//! Formation glue server.
//!
//! Runs the two function endpoints behind the landing page:
//! the chatbot gateway and the Eventbrite provisioning workflow.
//!
//! # Usage
//!
//! ```bash
//! OPENAI_API_KEY=... EVENTBRITE_API_KEY=... cargo run --bin server
//! ```

use formation_server::{AppState, Config, build_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,formation_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Formation glue server...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    if config.completions.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; the chatbot endpoint will report a configuration fault");
    }
    if config.eventbrite.api_key.is_none() {
        tracing::warn!("EVENTBRITE_API_KEY not set; the provisioning endpoint will report a configuration fault");
    }

    let state = AppState::from_config(config.clone());
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Formation glue server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
