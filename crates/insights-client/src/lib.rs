//! HTTP client library for the Market Insights API.
//!
//! This crate provides a typed HTTP client for the market insights backend:
//! credential submission, stock analysis, historical data, technical
//! indicators and market commentary.
//!
//! # Example
//!
//! ```no_run
//! use insights_client::{ClientConfig, InsightsClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), insights_client::Error> {
//!     let client = InsightsClient::new(ClientConfig {
//!         base_url: "http://localhost:8000".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     client.test_api_key("AIza...").await?;
//!     let analysis = client.analyze("AAPL").await?;
//!     println!("{}: {}", analysis.symbol, analysis.analysis);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, InsightsClient};
pub use error::Error;
pub use types::*;
