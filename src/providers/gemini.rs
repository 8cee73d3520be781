//! Google Gemini `generateContent` client.

use super::{LanguageModel, ProviderError};
use crate::config::ModelConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Header carrying the Gemini API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
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

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Gemini language model reached over REST.
#[derive(Debug, Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiModel {
    /// Creates a client for the configured model.
    #[must_use]
    pub fn new(config: &ModelConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ModelConfig) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.name
        );
        Self { client, endpoint }
    }

    /// Full `generateContent` URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageModel for GeminiModel {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Model(format!(
                "Gemini returned {}: {}",
                status, message
            )));
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed
            .into_text()
            .ok_or_else(|| ProviderError::Model("Gemini response contained no text".to_string()))?;

        debug!("Gemini returned {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let model = GeminiModel::new(&ModelConfig {
            name: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
        });
        assert_eq!(
            model.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_serialization() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "Test" }],
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"Test"}]}]}"#);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "market"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Hello, market"));
    }

    #[test]
    fn test_blocked_response_has_no_text() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.into_text().is_none());

        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_text().is_none());
    }
}
