//! Environment trait for the chat widget reducer.

use crate::gateway::CompletionGateway;
use formation_core::environment::{Clock, IdGenerator};
use std::sync::Arc;
use uuid::Uuid;

/// Environment dependencies for the chat widget reducer.
///
/// This follows the dependency-injection-via-traits pattern: different
/// implementations can be provided for production and testing.
pub trait ChatWidgetEnvironment: Send + Sync {
    /// Clock for timestamping messages.
    fn clock(&self) -> &dyn Clock;

    /// Generator for message ids.
    fn ids(&self) -> &dyn IdGenerator;

    /// Gateway used to reach the chatbot endpoint.
    ///
    /// Returned as an owned handle so effects can move it into their future.
    fn gateway(&self) -> Arc<dyn CompletionGateway>;
}

/// Production id generator backed by random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Production environment for the chat widget.
#[derive(Clone)]
pub struct ProductionChatWidgetEnvironment {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    gateway: Arc<dyn CompletionGateway>,
}

impl ProductionChatWidgetEnvironment {
    /// Create a new production environment.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        gateway: Arc<dyn CompletionGateway>,
    ) -> Self {
        Self {
            clock,
            ids,
            gateway,
        }
    }
}

impl ChatWidgetEnvironment for ProductionChatWidgetEnvironment {
    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn ids(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }

    fn gateway(&self) -> Arc<dyn CompletionGateway> {
        Arc::clone(&self.gateway)
    }
}
