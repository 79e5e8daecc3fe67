//! Axum web integration for the Formation backend.
//!
//! This crate provides the HTTP plumbing shared by the Formation glue
//! endpoints: an error type that renders the endpoints' JSON error shape,
//! and middleware for correlation-ID tracking.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Correlation IDs
//! │  - Response serialization               │  ← Logging
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Workflow functions returning         │  ← Testable without HTTP
//! │    tagged results                       │
//! │  - Reducer-driven state machines        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use formation_web::{AppError, WebResult};
//! use axum::Json;
//!
//! async fn handler() -> WebResult<Json<Reply>> {
//!     let key = config.api_key.as_ref()
//!         .ok_or_else(|| AppError::configuration("Configuration manquante"))?;
//!     Ok(Json(reply))
//! }
//! ```

pub mod error;
pub mod middleware;

// Re-export key types for convenience
pub use error::AppError;
pub use middleware::{CORRELATION_ID_HEADER, CorrelationIdExt, correlation_id_layer};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
