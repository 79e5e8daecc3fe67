//! Application state for the Formation glue server.
//!
//! Contains the shared resources the two endpoint handlers need: the
//! loaded configuration and the upstream clients. Clients are `None` when
//! their credential is absent; handlers turn that into the per-request
//! configuration fault.

use crate::config::Config;
use crate::provisioning::TicketingGateway;
use formation_completions::CompletionsClient;
use formation_eventbrite::EventbriteClient;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via Arc) for each request.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,

    /// Chat-completions client; `None` when `OPENAI_API_KEY` is absent
    pub completions: Option<Arc<CompletionsClient>>,

    /// Ticketing gateway; `None` when `EVENTBRITE_API_KEY` is absent
    pub ticketing: Option<Arc<dyn TicketingGateway>>,
}

impl AppState {
    /// Create a new application state with explicit clients.
    #[must_use]
    pub fn new(
        config: Arc<Config>,
        completions: Option<Arc<CompletionsClient>>,
        ticketing: Option<Arc<dyn TicketingGateway>>,
    ) -> Self {
        Self {
            config,
            completions,
            ticketing,
        }
    }

    /// Build the production state from configuration.
    ///
    /// Upstream clients are only constructed when their credential is
    /// configured.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        let completions = config
            .completions
            .api_key
            .clone()
            .map(|key| Arc::new(CompletionsClient::new(key)));

        let ticketing = config.eventbrite.api_key.clone().map(|key| {
            Arc::new(EventbriteClient::new(key)) as Arc<dyn TicketingGateway>
        });

        Self {
            config: Arc::new(config),
            completions,
            ticketing,
        }
    }
}
