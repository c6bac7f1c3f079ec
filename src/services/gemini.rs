//! Client for the Google Generative Language API (`generateContent`).
//!
//! Issues exactly one request per prompt with no retries. The request
//! timeout comes from configuration so a hung upstream cannot stall a
//! chat request indefinitely.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::services::assistant::{GenerationError, TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for a single configured Gemini model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Error envelope returned by the API.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, model = model, "Gemini client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn model_url(&self) -> String {
        format!("{}/v1beta/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        let url = format!("{}:generateContent", self.model_url());
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(url = %url, "Gemini request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gemini request failed");
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();

        if status.is_success() {
            let parsed = response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to parse Gemini response");
                    GenerationError::Malformed(e.to_string())
                })?;

            Ok(parsed.into_text())
        } else {
            let message = response
                .json::<ApiErrorEnvelope>()
                .await
                .ok()
                .map(|e| e.error.message)
                .unwrap_or_else(|| format!("Gemini error: {}", status));

            error!(status = %status, message = %message, "Gemini returned an error");

            Err(GenerationError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn health_check(&self) -> Result<()> {
        self.client
            .get(self.model_url())
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Gemini health check failed")?
            .error_for_status()
            .context("Gemini model unavailable")?;

        Ok(())
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const MODEL: &str = "gemini-pro";

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(&server.base_url(), "test-key", MODEL, 5).unwrap()
    }

    #[tokio::test]
    async fn generate_returns_concatenated_parts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-pro:generateContent")
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [{"text": "Sow wheat "}, {"text": "in November."}],
                            "role": "model"
                        },
                        "finishReason": "STOP"
                    }]
                }));
            })
            .await;

        let text = client(&server).generate("when to sow wheat?").await.unwrap();
        assert_eq!(text.as_deref(), Some("Sow wheat in November."));
        mock.assert_calls_async(1).await;
    }

    #[tokio::test]
    async fn generate_without_candidates_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let text = client(&server).generate("hello").await.unwrap();
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn generate_with_blocked_candidate_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
            })
            .await;

        let text = client(&server).generate("hello").await.unwrap();
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn invalid_key_is_a_configuration_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(400).json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "API key not valid. Please pass a valid API key.",
                        "status": "INVALID_ARGUMENT"
                    }
                }));
            })
            .await;

        let err = client(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Rejected { status: 400, .. }));
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn server_error_is_not_a_configuration_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("overloaded");
            })
            .await;

        let err = client(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Rejected { status: 503, .. }));
        assert!(!err.is_configuration());
    }

    #[tokio::test]
    async fn malformed_success_body_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = client(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_transport_error() {
        let gemini = GeminiClient::new("http://127.0.0.1:9", "test-key", MODEL, 2).unwrap();
        let err = gemini.generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }

    #[tokio::test]
    async fn health_check_hits_model_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1beta/models/gemini-pro");
                then.status(200).json_body(json!({ "name": "models/gemini-pro" }));
            })
            .await;

        client(&server).health_check().await.unwrap();
        mock.assert_async().await;
    }
}
