//! Application state management.

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::providers::{GeminiModel, LanguageModel, MarketDataProvider, YahooFinanceProvider};
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Active language model credential.
    pub credentials: Arc<CredentialStore>,
    /// Source of daily price history.
    pub market_data: Arc<dyn MarketDataProvider>,
    /// Text generation backend.
    pub model: Arc<dyn LanguageModel>,
}

impl AppState {
    /// Creates state wired to the live Yahoo Finance and Gemini clients.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_providers(
            Arc::new(YahooFinanceProvider::new(&config.market_data)),
            Arc::new(GeminiModel::new(&config.model)),
        )
    }

    /// Creates state around the given providers, with no credential set.
    #[must_use]
    pub fn with_providers(
        market_data: Arc<dyn MarketDataProvider>,
        model: Arc<dyn LanguageModel>,
    ) -> Self {
        Self {
            credentials: Arc::new(CredentialStore::new()),
            market_data,
            model,
        }
    }

    /// Creates state with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
