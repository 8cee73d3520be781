//! Prompt construction and response shaping for the analysis endpoints.
//!
//! Everything here is pure: the handlers fetch data and call the model, this
//! module turns bars into numbers, numbers into prompts, and model text into
//! response fields.

use crate::models::{HistoricalDataPoint, MarketInsightsResponse, PriceSnapshot};
use crate::providers::DailyBar;
use std::collections::HashMap;

/// Prompt used to check that a submitted API key works.
pub const CREDENTIAL_PROBE_PROMPT: &str = "Test";

/// Returned in place of the narrative when the model call fails.
pub const ANALYSIS_FALLBACK: &str = "Unable to generate AI analysis at this time.";

/// Prompt requesting the four-part market overview.
pub const MARKET_INSIGHTS_PROMPT: &str = "\
Provide a detailed market overview in the following format:

1. Current Market Trends:
[List key trends]

2. Key Economic Indicators:
[List important indicators]

3. Notable Market Events:
[List significant events]

4. Trading Opportunities:
[List potential opportunities]

Make it concise but informative.
";

const TRENDS_LABEL: &str = "current market trends";
const INDICATORS_LABEL: &str = "key economic indicators";
const EVENTS_LABEL: &str = "notable market events";
const OPPORTUNITIES_LABEL: &str = "trading opportunities";

const HEADER_PREFIXES: [&str; 4] = ["1.", "2.", "3.", "4."];

impl PriceSnapshot {
    /// Summarises a window of bars, oldest first. `None` for an empty window.
    #[must_use]
    pub fn from_bars(bars: &[DailyBar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;

        Some(Self {
            current_price: last.close,
            price_change: last.close - first.close,
            volume: last.volume,
            high: bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max),
            low: bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min),
        })
    }
}

impl From<&DailyBar> for HistoricalDataPoint {
    fn from(bar: &DailyBar) -> Self {
        Self {
            date: bar.date.format("%Y-%m-%d").to_string(),
            price: bar.close,
            volume: bar.volume,
        }
    }
}

/// Builds the narrative prompt for a stock snapshot.
#[must_use]
pub fn stock_analysis_prompt(symbol: &str, snapshot: &PriceSnapshot) -> String {
    format!(
        "Analyze the following stock data for {symbol}:
Current Price: ${:.2}
Price Change: ${:.2}
Volume: {}
30-day High: ${:.2}
30-day Low: ${:.2}

Please provide:
1. A brief market analysis
2. Key trends and patterns
3. Potential trading signals
4. Risk assessment
",
        snapshot.current_price,
        snapshot.price_change,
        snapshot.volume,
        snapshot.high,
        snapshot.low,
    )
}

/// Whether `line` opens a numbered section.
fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    HEADER_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Section label of a header line: the text between its first and second
/// period, trimmed, lowercased, colons removed.
fn header_label(line: &str) -> String {
    line.split('.')
        .nth(1)
        .unwrap_or_default()
        .trim()
        .to_lowercase()
        .replace(':', "")
}

/// Splits numbered model output into sections keyed by lowercase label.
///
/// Only headers numbered `1.` to `4.` are recognised. Lines before the first
/// header are dropped, blank lines are skipped and body lines are trimmed. A
/// repeated label keeps the last body seen.
#[must_use]
pub fn parse_sections(text: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines() {
        if is_header(line) {
            if let Some((label, body)) = current.take() {
                sections.insert(label, body.join("\n"));
            }
            current = Some((header_label(line), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                body.push(trimmed);
            }
        }
    }

    if let Some((label, body)) = current {
        sections.insert(label, body.join("\n"));
    }

    sections
}

impl MarketInsightsResponse {
    /// Maps parsed sections onto the four response fields. Missing sections
    /// become empty strings.
    #[must_use]
    pub fn from_sections(timestamp: String, sections: &HashMap<String, String>) -> Self {
        let field = |label: &str| sections.get(label).cloned().unwrap_or_default();

        Self {
            timestamp,
            trends: field(TRENDS_LABEL),
            indicators: field(INDICATORS_LABEL),
            events: field(EVENTS_LABEL),
            opportunities: field(OPPORTUNITIES_LABEL),
        }
    }

    /// Placeholder commentary used when the model is unavailable.
    #[must_use]
    pub fn fallback(timestamp: String) -> Self {
        Self {
            timestamp,
            trends: "Unable to generate market trends at this time.".to_string(),
            indicators: "Unable to generate economic indicators at this time.".to_string(),
            events: "Unable to generate market events at this time.".to_string(),
            opportunities: "Unable to generate trading opportunities at this time.".to_string(),
        }
    }
}
