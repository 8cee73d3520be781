//! HTTP client for the insights API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Market Insights API.
#[derive(Debug, Clone)]
pub struct InsightsClient {
    client: Client,
    base_url: String,
}

impl InsightsClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        url::Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Service
    // ========================================================================

    /// Fetches the service banner.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn root(&self) -> Result<MessageResponse, Error> {
        let resp = self.client.get(self.url("/")).send().await?;
        self.handle_response(resp).await
    }

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let resp = self.client.get(self.url("/health")).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Credentials
    // ========================================================================

    /// Submits a language model API key for validation and storage.
    ///
    /// # Errors
    /// Returns [`Error::Unauthorized`] if the key is rejected.
    pub async fn test_api_key(&self, api_key: &str) -> Result<StatusResponse, Error> {
        let body = ApiKeyRequest {
            api_key: api_key.to_string(),
        };
        let resp = self
            .client
            .post(self.url("/test-api-key"))
            .json(&body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Fetches the price snapshot and AI narrative for a symbol.
    ///
    /// # Errors
    /// Returns error if no key is set, the symbol has no data, or the request fails.
    pub async fn analyze(&self, symbol: &str) -> Result<StockAnalysisResponse, Error> {
        let resp = self
            .client
            .get(self.url(&format!("/analyze/{}", symbol)))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Fetches the daily close/volume series for a symbol.
    ///
    /// # Errors
    /// Returns error if the symbol has no data or the request fails.
    pub async fn historical_data(&self, symbol: &str) -> Result<Vec<HistoricalDataPoint>, Error> {
        let resp = self
            .client
            .get(self.url(&format!("/historical-data/{}", symbol)))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Fetches technical indicators for a symbol.
    ///
    /// # Errors
    /// Returns error if the symbol has no data or the request fails.
    pub async fn technical_indicators(
        &self,
        symbol: &str,
    ) -> Result<TechnicalIndicatorsResponse, Error> {
        let resp = self
            .client
            .get(self.url(&format!("/technical-indicators/{}", symbol)))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Market Commentary
    // ========================================================================

    /// Fetches the AI market overview.
    ///
    /// # Errors
    /// Returns error if no key is set or the request fails.
    pub async fn market_insights(&self) -> Result<MarketInsightsResponse, Error> {
        let resp = self.client.get(self.url("/market-insights")).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        let text = resp.text().await?;
        decode_response(status, &text)
    }
}

/// Decodes a success body into `T`, or maps the failure via [`error_for_status`].
fn decode_response<T: serde::de::DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, Error> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    Err(error_for_status(status, body))
}

/// Maps a non-success response to an [`Error`], preferring the `detail` field
/// of the body over the raw text.
fn error_for_status(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    }
}
