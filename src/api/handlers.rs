//! API request handlers.

use crate::analysis::{
    ANALYSIS_FALLBACK, CREDENTIAL_PROBE_PROMPT, MARKET_INSIGHTS_PROMPT, parse_sections,
    stock_analysis_prompt,
};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    ApiKeyRequest, HealthResponse, HistoricalDataPoint, MarketInsightsResponse, MessageResponse,
    PriceSnapshot, StatusResponse, StockAnalysisResponse, TechnicalIndicatorsResponse,
};
use crate::providers::DailyBar;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};


/// Returns the active credential or fails with 401.
fn require_api_key(state: &AppState) -> Result<String, ApiError> {
    state.credentials.get().ok_or(ApiError::Unauthenticated)
}

/// Fetches the daily history for `symbol`, failing with 404 when it is empty.
async fn fetch_history(state: &AppState, symbol: &str) -> Result<Vec<DailyBar>, ApiError> {
    let bars = state.market_data.monthly_history(symbol).await.map_err(|e| {
        error!("Market data error for {}: {}", symbol, e);
        ApiError::from(e)
    })?;

    if bars.is_empty() {
        warn!("No data found for symbol {}", symbol);
        return Err(ApiError::NotFound(symbol.to_string()));
    }

    Ok(bars)
}

// ============================================================================
// Service
// ============================================================================

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Trading Bot API is running".to_string(),
    })
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Credentials
// ============================================================================

/// Validate and store a language model API key.
///
/// The key is tried with one live generation call and only stored if that
/// call succeeds. On failure the previously stored key stays active.
#[utoipa::path(
    post,
    path = "/test-api-key",
    request_body = ApiKeyRequest,
    responses(
        (status = 200, description = "API key accepted", body = StatusResponse),
        (status = 401, description = "API key rejected", body = ErrorResponse)
    ),
    tag = "Credentials"
)]
pub async fn test_api_key(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ApiKeyRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    match state
        .model
        .generate(&request.api_key, CREDENTIAL_PROBE_PROMPT)
        .await
    {
        Ok(_) => {
            state.credentials.set(request.api_key);
            info!("API key accepted");
            Ok(Json(StatusResponse {
                status: "success".to_string(),
            }))
        }
        Err(e) => {
            error!("API key test failed: {}", e);
            Err(ApiError::InvalidApiKey)
        }
    }
}

// ============================================================================
// Market Data
// ============================================================================

/// Analyze a stock: price snapshot plus model narrative.
#[utoipa::path(
    get,
    path = "/analyze/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol")
    ),
    responses(
        (status = 200, description = "Stock analysis", body = StockAnalysisResponse),
        (status = 401, description = "API key not set", body = ErrorResponse),
        (status = 404, description = "No data for symbol", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    ),
    tag = "Market Data"
)]
pub async fn analyze_stock(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<StockAnalysisResponse>, ApiError> {
    let api_key = require_api_key(&state)?;

    info!("Analyzing stock: {}", symbol);
    let bars = fetch_history(&state, &symbol).await?;
    let snapshot = PriceSnapshot::from_bars(&bars)
        .ok_or_else(|| ApiError::NotFound(symbol.clone()))?;

    let prompt = stock_analysis_prompt(&symbol, &snapshot);
    let analysis = match state.model.generate(&api_key, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Model error analyzing {}: {}", symbol, e);
            ANALYSIS_FALLBACK.to_string()
        }
    };

    Ok(Json(StockAnalysisResponse {
        symbol,
        data: snapshot,
        analysis,
    }))
}

/// Daily close and volume history for charting.
#[utoipa::path(
    get,
    path = "/historical-data/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol")
    ),
    responses(
        (status = 200, description = "Daily history, oldest first", body = [HistoricalDataPoint]),
        (status = 404, description = "No data for symbol", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    ),
    tag = "Market Data"
)]
pub async fn get_historical_data(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<Vec<HistoricalDataPoint>>, ApiError> {
    info!("Fetching historical data for: {}", symbol);
    let bars = fetch_history(&state, &symbol).await?;

    Ok(Json(bars.iter().map(HistoricalDataPoint::from).collect()))
}

/// SMA, EMA, RSI and MACD over the daily close series.
#[utoipa::path(
    get,
    path = "/technical-indicators/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol")
    ),
    responses(
        (status = 200, description = "Technical indicators", body = TechnicalIndicatorsResponse),
        (status = 404, description = "No data for symbol", body = ErrorResponse),
        (status = 500, description = "Provider failure", body = ErrorResponse)
    ),
    tag = "Market Data"
)]
pub async fn get_technical_indicators(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<TechnicalIndicatorsResponse>, ApiError> {
    info!("Computing technical indicators for: {}", symbol);
    let bars = fetch_history(&state, &symbol).await?;
    let series: Vec<HistoricalDataPoint> = bars.iter().map(HistoricalDataPoint::from).collect();

    Ok(Json(TechnicalIndicatorsResponse::compute(symbol, &series)))
}

// ============================================================================
// Market Commentary
// ============================================================================

/// Four-part market overview generated by the model.
///
/// A model failure is reported through placeholder text, not an error status.
#[utoipa::path(
    get,
    path = "/market-insights",
    responses(
        (status = 200, description = "Market commentary", body = MarketInsightsResponse),
        (status = 401, description = "API key not set", body = ErrorResponse)
    ),
    tag = "Market Commentary"
)]
pub async fn get_market_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MarketInsightsResponse>, ApiError> {
    let api_key = require_api_key(&state)?;

    info!("Fetching market insights");
    let reply = state.model.generate(&api_key, MARKET_INSIGHTS_PROMPT).await;
    let timestamp = Utc::now().to_rfc3339();

    let response = match reply {
        Ok(text) => MarketInsightsResponse::from_sections(timestamp, &parse_sections(&text)),
        Err(e) => {
            error!("Model error generating market insights: {}", e);
            MarketInsightsResponse::fallback(timestamp)
        }
    };

    Ok(Json(response))
}
