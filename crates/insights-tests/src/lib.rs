//! Integration tests for the Market Insights API.
//!
//! These tests require the API server to be running and are ignored by
//! default; run them with `cargo test -p insights-tests -- --ignored`.
//! Configure the server URL via `API_BASE_URL` (default:
//! `http://localhost:8000`) and supply a Gemini key via `GEMINI_API_KEY` for
//! the tests that need one.

use insights_client::{ClientConfig, InsightsClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Gemini key for tests exercising AI endpoints, if one is configured.
#[must_use]
pub fn gemini_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<InsightsClient, insights_client::Error> {
    InsightsClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(60),
    })
}
