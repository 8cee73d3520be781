//! Request and response models for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to submit a language model API key.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ApiKeyRequest {
    /// The candidate API key.
    pub api_key: String,
}

/// Generic status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Outcome, always `"success"` when returned.
    pub status: String,
}

/// Root endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Service banner.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Numeric summary of a price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
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
#[derive(Debug, Serialize, ToSchema)]
pub struct StockAnalysisResponse {
    /// Requested ticker symbol.
    pub symbol: String,
    /// Price snapshot.
    pub data: PriceSnapshot,
    /// Model-generated narrative, or a fallback message.
    pub analysis: String,
}

/// One point of the historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoricalDataPoint {
    /// Trading date (YYYY-MM-DD).
    pub date: String,
    /// Closing price.
    pub price: f64,
    /// Shares traded.
    pub volume: u64,
}

/// Market commentary split into sections.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
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

/// A single indicator value.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IndicatorPoint {
    /// Trading date (YYYY-MM-DD).
    pub date: String,
    /// Indicator value.
    pub value: f64,
}

/// Technical indicators over the historical close series.
#[derive(Debug, Serialize, ToSchema)]
pub struct TechnicalIndicatorsResponse {
    /// Requested ticker symbol.
    pub symbol: String,
    /// 20-day simple moving average.
    pub sma: Vec<IndicatorPoint>,
    /// 20-day exponential moving average.
    pub ema: Vec<IndicatorPoint>,
    /// 14-day relative strength index.
    pub rsi: Vec<IndicatorPoint>,
    /// EMA(12) minus EMA(26).
    pub macd: Vec<IndicatorPoint>,
}
