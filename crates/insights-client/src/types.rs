//! Request and response types for the insights API.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

// ============================================================================
// Service
// ============================================================================

/// Root endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Service banner.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

// ============================================================================
// Credentials
// ============================================================================

/// Request to submit a language model API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyRequest {
    /// The candidate API key.
    pub api_key: String,
}

/// Generic status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome.
    pub status: String,
}

// ============================================================================
// Market Data
// ============================================================================

/// Numeric summary of a price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Last close in the window.
    pub current_price: f64,
    /// Last close minus first close.
    pub price_change: f64,
    /// Volume of the last day.
    pub volume: u64,
    /// Highest high in the window.
    pub high: f64,
    /// Lowest low in the window.
    pub low: f64,
}

/// Stock analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAnalysisResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// Price snapshot.
    pub data: PriceSnapshot,
    /// Model narrative or fallback text.
    pub analysis: String,
}

/// One point of the historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDataPoint {
    /// Trading date (YYYY-MM-DD).
    pub date: String,
    /// Closing price.
    pub price: f64,
    /// Shares traded.
    pub volume: u64,
}

/// A single indicator value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    /// Trading date (YYYY-MM-DD).
    pub date: String,
    /// Indicator value.
    pub value: f64,
}

/// Technical indicators response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalIndicatorsResponse {
    /// Ticker symbol.
    pub symbol: String,
    /// 20-day simple moving average.
    pub sma: Vec<IndicatorPoint>,
    /// 20-day exponential moving average.
    pub ema: Vec<IndicatorPoint>,
    /// 14-day relative strength index.
    pub rsi: Vec<IndicatorPoint>,
    /// MACD line.
    pub macd: Vec<IndicatorPoint>,
}

// ============================================================================
// Market Commentary
// ============================================================================

/// Market commentary split into sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsightsResponse {
    /// ISO 8601 generation time.
    pub timestamp: String,
    /// Current market trends.
    pub trends: String,
    /// Key economic indicators.
    pub indicators: String,
    /// Notable market events.
    pub events: String,
    /// Trading opportunities.
    pub opportunities: String,
}
