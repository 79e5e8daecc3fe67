//! # Chat Completions API Client
//!
//! Rust client library for an OpenAI-compatible chat-completions API.
//! The Formation chatbot gateway uses it for single-turn, non-streaming
//! requests.
//!
//! ## Example
//!
//! ```no_run
//! use formation_completions::{ChatCompletionRequest, CompletionsClient};
//! use formation_completions::types::Message;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from OPENAI_API_KEY environment variable
//!     let client = CompletionsClient::from_env()?;
//!
//!     let request = ChatCompletionRequest::new(vec![
//!         Message::system("Tu es un assistant utile."),
//!         Message::user("Bonjour !"),
//!     ]);
//!
//!     let response = client.chat_completion(request).await?;
//!     println!("Reply: {:?}", response.reply_text());
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use chat::{ChatCompletionRequest, ChatCompletionResponse, Choice};
pub use client::CompletionsClient;
pub use error::CompletionsError;
pub use types::{Message, Role, Usage};
