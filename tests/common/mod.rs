//! Shared fakes for router tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use market_insights_backend::api::{cors_layer, create_router};
use market_insights_backend::providers::{
    DailyBar, LanguageModel, MarketDataProvider, ProviderError,
};
use market_insights_backend::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;

pub const VALID_KEY: &str = "valid-key";

/// Market data keyed by symbol; unknown symbols yield no bars.
#[derive(Default)]
pub struct FakeMarketData {
    pub history: HashMap<String, Vec<DailyBar>>,
}

#[async_trait]
impl MarketDataProvider for FakeMarketData {
    async fn monthly_history(&self, symbol: &str) -> Result<Vec<DailyBar>, ProviderError> {
        if symbol == "BOOM" {
            return Err(ProviderError::MarketData("upstream exploded".to_string()));
        }
        Ok(self.history.get(symbol).cloned().unwrap_or_default())
    }
}

/// Accepts [`VALID_KEY`] and answers with `reply`, or fails when `reply` is `None`.
pub struct FakeModel {
    pub reply: Option<String>,
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn generate(&self, api_key: &str, _prompt: &str) -> Result<String, ProviderError> {
        if api_key != VALID_KEY {
            return Err(ProviderError::Model("API_KEY_INVALID".to_string()));
        }
        self.reply
            .clone()
            .ok_or_else(|| ProviderError::Model("quota exceeded".to_string()))
    }
}

pub fn bars(closes: &[f64]) -> Vec<DailyBar> {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| DailyBar {
            date: start + chrono::Days::new(i as u64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 500 + i as u64,
        })
        .collect()
}

/// Router with CORS over fakes. `AAPL` has three days of history.
pub fn test_app(reply: Option<&str>) -> (axum::Router, Arc<AppState>) {
    let mut market_data = FakeMarketData::default();
    market_data
        .history
        .insert("AAPL".to_string(), bars(&[150.0, 152.5, 151.0]));

    let state = Arc::new(AppState::with_providers(
        Arc::new(market_data),
        Arc::new(FakeModel {
            reply: reply.map(str::to_string),
        }),
    ));

    (create_router(state.clone()).layer(cors_layer()), state)
}
