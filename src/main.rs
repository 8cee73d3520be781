//! Market Insights Backend Server
//!
//! REST API server for stock data and AI market commentary.

use market_insights_backend::api::{cors_layer, create_router};
use market_insights_backend::config::Config;
use market_insights_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use market_insights_backend::error::ErrorResponse;
use market_insights_backend::models::{
    ApiKeyRequest, HealthResponse, HistoricalDataPoint, IndicatorPoint, MarketInsightsResponse,
    MessageResponse, PriceSnapshot, StatusResponse, StockAnalysisResponse,
    TechnicalIndicatorsResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        market_insights_backend::api::handlers::root,
        market_insights_backend::api::handlers::health_check,
        market_insights_backend::api::handlers::test_api_key,
        market_insights_backend::api::handlers::analyze_stock,
        market_insights_backend::api::handlers::get_historical_data,
        market_insights_backend::api::handlers::get_technical_indicators,
        market_insights_backend::api::handlers::get_market_insights,
    ),
    components(
        schemas(
            ApiKeyRequest,
            StatusResponse,
            MessageResponse,
            HealthResponse,
            PriceSnapshot,
            StockAnalysisResponse,
            HistoricalDataPoint,
            IndicatorPoint,
            TechnicalIndicatorsResponse,
            MarketInsightsResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Credentials", description = "Language model API key management"),
        (name = "Market Data", description = "Price history, snapshots and indicators"),
        (name = "Market Commentary", description = "AI-generated market overview"),
    ),
    info(
        title = "Market Insights API",
        version = "0.1.0",
        description = "REST API for stock data and AI market commentary",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config));

    let addr = config.server.bind_address();
    info!("Starting Market Insights Backend on {}", addr);
    info!("Using model {}", config.model.name);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
