pub mod chat;
pub mod speech;

use std::time::Duration;

use serde::Deserialize;

pub use chat::{ChatCompletionRequest, ChatMessage};
pub use speech::SpeechRequest;

const OPENAI_BASE_URL: &str = "https://api.openai.com";

// A hung provider call would otherwise block its request indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, OPENAI_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("completion contained no choices")]
    EmptyCompletion,
}

impl OpenAiError {
    /// Provider-reported error code (e.g. `insufficient_quota`), when present.
    pub fn code(&self) -> Option<&str> {
        match self {
            OpenAiError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

// OpenAI wraps failures as {"error": {"message", "type", "param", "code"}}.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Read a non-success response into an [`OpenAiError::Api`].
async fn error_from_response(response: reqwest::Response) -> OpenAiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => OpenAiError::Api {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => OpenAiError::Api {
            status,
            code: None,
            message: body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_points_at_openai() {
        let client = OpenAiClient::new("test-key");
        assert_eq!(client.base_url, OPENAI_BASE_URL);
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = OpenAiClient::with_base_url("test-key", "https://my-proxy.example.com/");
        assert_eq!(client.base_url, "https://my-proxy.example.com");
    }

    #[test]
    fn parses_error_envelope() {
        let body = r#"{"error":{"message":"You exceeded your current quota.","type":"insufficient_quota","param":null,"code":"insufficient_quota"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code.as_deref(), Some("insufficient_quota"));
        assert_eq!(envelope.error.message, "You exceeded your current quota.");
    }

    #[test]
    fn parses_error_envelope_without_code() {
        let body = r#"{"error":{"message":"The server had an error."}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.error.code.is_none());
    }

    #[test]
    fn api_error_exposes_code() {
        let err = OpenAiError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            code: Some("invalid_api_key".into()),
            message: "Incorrect API key provided".into(),
        };
        assert_eq!(err.code(), Some("invalid_api_key"));
        assert_eq!(OpenAiError::EmptyCompletion.code(), None);
    }
}
