//! Yahoo Finance market data.

use super::{DailyBar, MarketDataProvider, ProviderError};
use crate::config::MarketDataConfig;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use tracing::debug;
use yahoo_finance_api as yahoo;
use yahoo_finance_api::{YResponse, YahooError};

/// Daily history from the Yahoo Finance chart API.
#[derive(Debug, Clone)]
pub struct YahooFinanceProvider {
    range: String,
    interval: String,
}

impl YahooFinanceProvider {
    /// Creates a provider using the configured range and interval.
    #[must_use]
    pub fn new(config: &MarketDataConfig) -> Self {
        Self {
            range: config.range.clone(),
            interval: config.interval.clone(),
        }
    }

    async fn fetch(&self, symbol: &str) -> Result<Vec<DailyBar>, YahooError> {
        let connector = yahoo::YahooConnector::new()?;
        let response = connector
            .get_quote_range(symbol, &self.interval, &self.range)
            .await?;

        daily_bars(&response)
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new(&MarketDataConfig::default())
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn monthly_history(&self, symbol: &str) -> Result<Vec<DailyBar>, ProviderError> {
        let bars = self.fetch(symbol).await.or_else(classify_error)?;
        debug!("Fetched {} daily bars for {}", bars.len(), symbol);

        Ok(bars)
    }
}

/// Converts a chart response into bars dated in the exchange's local calendar,
/// oldest first.
fn daily_bars(response: &YResponse) -> Result<Vec<DailyBar>, YahooError> {
    let quotes = response.quotes()?;
    let offset = FixedOffset::east_opt(response.metadata()?.gmtoffset)
        .ok_or(YahooError::DataInconsistency)?;

    let mut bars = quotes
        .iter()
        .map(|q| {
            let date = DateTime::from_timestamp(q.timestamp, 0)
                .map(|dt| dt.with_timezone(&offset).date_naive())
                .ok_or(YahooError::DataInconsistency)?;

            Ok(DailyBar {
                date,
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
        })
        .collect::<Result<Vec<_>, YahooError>>()?;

    bars.sort_by_key(|bar| bar.date);
    Ok(bars)
}

/// Yahoo reports unknown symbols and empty ranges as errors; those mean "no
/// data" here. Everything else is a provider failure.
fn classify_error(error: YahooError) -> Result<Vec<DailyBar>, ProviderError> {
    match error {
        YahooError::NoResult | YahooError::NoQuotes | YahooError::ApiError(_) => {
            debug!("Yahoo returned no data: {:?}", error);
            Ok(Vec::new())
        }
        other => Err(ProviderError::MarketData(other.to_string())),
    }
}
