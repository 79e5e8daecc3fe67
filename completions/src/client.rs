//! Chat-completions API client implementation

use crate::{
    chat::{ChatCompletionRequest, ChatCompletionResponse},
    error::CompletionsError,
};
use reqwest::{Client, StatusCode};

/// Chat-completions API client
#[derive(Clone)]
pub struct CompletionsClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl CompletionsClient {
    /// Create a new client with API key from environment
    ///
    /// # Errors
    ///
    /// Returns `CompletionsError::MissingApiKey` if `OPENAI_API_KEY` is not set
    pub fn from_env() -> Result<Self, CompletionsError> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| CompletionsError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Create a new client with explicit API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Override the API base URL (used for tests against a mock server)
    #[must_use]
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Create a chat completion (non-streaming)
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionsError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionsError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .map_err(|e| CompletionsError::ResponseParseFailed(e.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(CompletionsError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(CompletionsError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(CompletionsError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)] // Test code
mod tests {
    use super::*;
    use crate::types::Message;
    use wiremock::matchers::{bearer_token, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = CompletionsClient::new("test-key".to_string());
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.api_url, "https://api.openai.com/v1");
    }

    #[tokio::test]
    async fn test_chat_completion_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(bearer_token("test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "model": "gpt-5-mini-2025-08-07",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Bonjour !"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompletionsClient::new("test-key".to_string()).with_api_url(server.uri());

        let response = client
            .chat_completion(ChatCompletionRequest::new(vec![Message::user("Salut")]))
            .await
            .unwrap();

        assert_eq!(response.reply_text(), Some("Bonjour !"));
    }

    #[tokio::test]
    async fn test_chat_completion_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = CompletionsClient::new("bad-key".to_string()).with_api_url(server.uri());

        let err = client
            .chat_completion(ChatCompletionRequest::new(vec![Message::user("Salut")]))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionsError::Unauthorized));
        assert_eq!(err.upstream_status(), Some(401));
    }

    #[tokio::test]
    async fn test_chat_completion_api_error_keeps_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(503).set_body_string(r#"{"error":"overloaded"}"#),
            )
            .mount(&server)
            .await;

        let client = CompletionsClient::new("test-key".to_string()).with_api_url(server.uri());

        let err = client
            .chat_completion(ChatCompletionRequest::new(vec![Message::user("Salut")]))
            .await
            .unwrap_err();

        match err {
            CompletionsError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("overloaded"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
