//! External collaborators: the market data source and the language model.
//!
//! Handlers only see the [`MarketDataProvider`] and [`LanguageModel`] traits,
//! so the live Yahoo Finance and Gemini clients can be swapped for in-process
//! fakes.

mod gemini;
mod yahoo;

pub use gemini::GeminiModel;
pub use yahoo::YahooFinanceProvider;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by external providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The market data source failed or returned unusable data.
    #[error("{0}")]
    MarketData(String),

    /// The language model rejected the request or returned no text.
    #[error("{0}")]
    Model(String),

    /// Transport-level failure talking to a provider.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One trading day of price and volume data.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

/// Source of daily price history.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Returns roughly one month of daily bars for `symbol`, oldest first.
    ///
    /// An unknown symbol may yield an empty vector rather than an error.
    async fn monthly_history(&self, symbol: &str) -> Result<Vec<DailyBar>, ProviderError>;
}

/// Text generation backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generates a completion for `prompt`, authenticating with `api_key`.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError>;
}
