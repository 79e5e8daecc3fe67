//! Configuration management for the Formation glue server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Upstream credentials are optional at startup: their absence is reported
//! per-request as a configuration fault, matching the serverless behavior
//! this server replaces.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Chat-completions API configuration
    pub completions: CompletionsConfig,
    /// Eventbrite API configuration
    pub eventbrite: EventbriteConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Chat-completions API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionsConfig {
    /// API key; absent means the chatbot endpoint answers with a
    /// configuration fault
    pub api_key: Option<String>,
    /// Model the gateway requests
    pub model: String,
    /// Completion token budget per reply
    pub max_completion_tokens: u32,
}

/// Eventbrite API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventbriteConfig {
    /// API key; absent means the provisioning endpoint answers with a
    /// configuration fault
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            completions: CompletionsConfig {
                api_key: env::var("OPENAI_API_KEY").ok(),
                model: env::var("CHATBOT_MODEL")
                    .unwrap_or_else(|_| "gpt-5-mini-2025-08-07".to_string()),
                max_completion_tokens: env::var("CHATBOT_MAX_COMPLETION_TOKENS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
            },
            eventbrite: EventbriteConfig {
                api_key: env::var("EVENTBRITE_API_KEY").ok(),
            },
        }
    }

    /// Configuration with no credentials, for tests.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                log_level: "debug".to_string(),
            },
            completions: CompletionsConfig {
                api_key: None,
                model: "gpt-5-mini-2025-08-07".to_string(),
                max_completion_tokens: 500,
            },
            eventbrite: EventbriteConfig { api_key: None },
        }
    }
}
