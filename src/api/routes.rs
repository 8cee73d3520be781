//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Service
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Credentials
        .route("/test-api-key", post(handlers::test_api_key))
        // Market data
        .route("/analyze/{symbol}", get(handlers::analyze_stock))
        .route("/historical-data/{symbol}", get(handlers::get_historical_data))
        .route(
            "/technical-indicators/{symbol}",
            get(handlers::get_technical_indicators),
        )
        // Market commentary
        .route("/market-insights", get(handlers::get_market_insights))
        .with_state(state)
}

/// CORS policy allowing any origin, method and header.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
