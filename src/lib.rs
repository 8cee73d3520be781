//! # Market Insights Backend - REST API Server
//!
//! A small REST backend that serves stock price history from Yahoo Finance and
//! market commentary generated by Google Gemini. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and provides
//! OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Stock Analysis**: One month of daily bars reduced to a price snapshot
//!   and narrated by the language model.
//!
//! - **Charting Data**: Daily close/volume series plus SMA, EMA, RSI and MACD.
//!
//! - **Market Commentary**: A four-part model-generated overview split into
//!   trends, indicators, events and opportunities.
//!
//! - **Graceful Degradation**: Model failures are replaced with fixed
//!   placeholder text; only market data failures surface as errors.
//!
//! - **CORS Support**: Any origin, method and header is allowed.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`analysis`] | Snapshot math, prompts and the section splitter |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`credentials`] | Single-slot API key store |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`indicators`] | Technical indicators over a close series |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`providers`] | Yahoo Finance and Gemini clients behind traits |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Service banner |
//! | GET | `/health` | Health check |
//! | POST | `/test-api-key` | Validate and store the Gemini API key |
//! | GET | `/analyze/{symbol}` | Price snapshot with AI narrative |
//! | GET | `/historical-data/{symbol}` | Daily close/volume series |
//! | GET | `/technical-indicators/{symbol}` | SMA, EMA, RSI, MACD |
//! | GET | `/market-insights` | AI market overview |
//!
//! Endpoints that call the model return 401 until a key has been accepted by
//! `/test-api-key`.
//!
//! ## Example Usage
//!
//! ```bash
//! # Default port 8000
//! cargo run
//!
//! # Custom port and model
//! PORT=3000 GEMINI_MODEL=gemini-2.0-flash cargo run
//!
//! # Load settings from a TOML file
//! CONFIG_PATH=config.toml cargo run
//! ```
//!
//! ```bash
//! curl -X POST http://localhost:8000/test-api-key \
//!   -H "Content-Type: application/json" \
//!   -d '{"api_key": "AIza..."}'
//!
//! curl http://localhost:8000/analyze/AAPL
//! curl http://localhost:8000/historical-data/AAPL
//! curl http://localhost:8000/market-insights
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod indicators;
pub mod models;
pub mod providers;
pub mod state;
