//! Technical indicators over a daily close series.
//!
//! Each function takes `(date, close)` points ordered oldest first and returns
//! one [`IndicatorPoint`] per date where the indicator is defined. Too-short
//! inputs produce an empty series rather than an error.

use crate::models::{HistoricalDataPoint, IndicatorPoint, TechnicalIndicatorsResponse};

/// Default SMA/EMA window.
pub const MOVING_AVERAGE_PERIOD: usize = 20;
/// Default RSI window.
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA period.
pub const MACD_FAST_PERIOD: usize = 12;
/// MACD slow EMA period.
pub const MACD_SLOW_PERIOD: usize = 26;

/// Simple moving average of the last `period` closes.
#[must_use]
pub fn sma(series: &[HistoricalDataPoint], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || series.len() < period {
        return Vec::new();
    }

    series
        .windows(period)
        .map(|window| {
            let sum: f64 = window.iter().map(|p| p.price).sum();
            IndicatorPoint {
                date: window[period - 1].date.clone(),
                value: sum / period as f64,
            }
        })
        .collect()
}

/// Exponential moving average seeded with the first close.
///
/// The seed itself is not emitted, so the output starts at the second point.
#[must_use]
pub fn ema(series: &[HistoricalDataPoint], period: usize) -> Vec<IndicatorPoint> {
    if series.len() < 2 {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut prev = series[0].price;

    series[1..]
        .iter()
        .map(|point| {
            let value = (point.price - prev) * multiplier + prev;
            prev = value;
            IndicatorPoint {
                date: point.date.clone(),
                value,
            }
        })
        .collect()
}

/// Relative strength index using rolling sums of gains and losses.
///
/// A zero average loss is treated as 1 to keep the ratio finite.
#[must_use]
pub fn rsi(series: &[HistoricalDataPoint], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || series.len() < period + 1 {
        return Vec::new();
    }

    let change = |i: usize| series[i].price - series[i - 1].price;
    let value = |gains: f64, losses: f64| {
        let avg_gain = gains / period as f64;
        let avg_loss = losses / period as f64;
        let rs = avg_gain / if avg_loss == 0.0 { 1.0 } else { avg_loss };
        100.0 - 100.0 / (1.0 + rs)
    };

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let c = change(i);
        if c >= 0.0 {
            gains += c;
        } else {
            losses -= c;
        }
    }

    let mut out = Vec::with_capacity(series.len() - period);
    out.push(IndicatorPoint {
        date: series[period].date.clone(),
        value: value(gains, losses),
    });

    for i in period + 1..series.len() {
        let c = change(i);
        if c >= 0.0 {
            gains += c;
        } else {
            losses -= c;
        }

        let dropped = change(i - period);
        if dropped >= 0.0 {
            gains -= dropped;
        } else {
            losses += dropped;
        }

        out.push(IndicatorPoint {
            date: series[i].date.clone(),
            value: value(gains, losses),
        });
    }

    out
}

/// MACD line: fast EMA minus slow EMA, aligned by position.
#[must_use]
pub fn macd(series: &[HistoricalDataPoint]) -> Vec<IndicatorPoint> {
    if series.len() < MACD_SLOW_PERIOD {
        return Vec::new();
    }

    let fast = ema(series, MACD_FAST_PERIOD);
    let slow = ema(series, MACD_SLOW_PERIOD);

    fast.iter()
        .zip(slow.iter())
        .map(|(f, s)| IndicatorPoint {
            date: s.date.clone(),
            value: f.value - s.value,
        })
        .collect()
}

impl TechnicalIndicatorsResponse {
    /// Computes every indicator with its default period.
    #[must_use]
    pub fn compute(symbol: String, series: &[HistoricalDataPoint]) -> Self {
        Self {
            symbol,
            sma: sma(series, MOVING_AVERAGE_PERIOD),
            ema: ema(series, MOVING_AVERAGE_PERIOD),
            rsi: rsi(series, RSI_PERIOD),
            macd: macd(series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<HistoricalDataPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| HistoricalDataPoint {
                date: format!("2024-01-{:02}", i + 1),
                price,
                volume: 0,
            })
            .collect()
    }

    fn ramp(n: usize) -> Vec<HistoricalDataPoint> {
        let prices: Vec<f64> = (0..n).map(|i| 10.0 + i as f64).collect();
        series(&prices)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sma_too_short() {
        assert!(sma(&ramp(3), 4).is_empty());
    }

    #[test]
    fn test_sma_values() {
        let out = sma(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].date, "2024-01-03");
        assert!(approx(out[0].value, 2.0));
        assert!(approx(out[1].value, 3.0));
        assert!(approx(out[2].value, 4.0));
    }

    #[test]
    fn test_ema_seeded_with_first_close() {
        let out = ema(&series(&[10.0, 13.0, 13.0]), 2);
        // multiplier = 2/3
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, "2024-01-02");
        assert!(approx(out[0].value, 12.0));
        assert!(approx(out[1].value, 12.0 + (13.0 - 12.0) * 2.0 / 3.0));
    }

    #[test]
    fn test_ema_single_point() {
        assert!(ema(&series(&[10.0]), 20).is_empty());
    }

    #[test]
    fn test_rsi_all_gains() {
        let out = rsi(&ramp(16), 14);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, "2024-01-15");
        // avg_gain = 1, avg_loss = 0 -> treated as 1, rs = 1
        assert!(approx(out[0].value, 50.0));
        assert!(approx(out[1].value, 50.0));
    }

    #[test]
    fn test_rsi_balanced_changes() {
        let prices = [10.0, 12.0, 11.0, 13.0, 12.0];
        let out = rsi(&series(&prices), 2);
        // window (+2, -1): rs = 1/0.5 = 2 -> 66.67
        assert!(approx(out[0].value, 100.0 - 100.0 / 3.0));
        // window (-1, +2): same sums
        assert!(approx(out[1].value, 100.0 - 100.0 / 3.0));
        // window (+2, -1)
        assert!(approx(out[2].value, 100.0 - 100.0 / 3.0));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_rsi_too_short() {
        assert!(rsi(&ramp(14), 14).is_empty());
    }

    #[test]
    fn test_macd_length_and_sign() {
        let out = macd(&ramp(30));
        assert_eq!(out.len(), 29);
        assert_eq!(out[0].date, "2024-01-02");
        // On a rising series the fast EMA leads the slow one.
        assert!(out.iter().all(|p| p.value > 0.0));
    }

    #[test]
    fn test_macd_too_short() {
        assert!(macd(&ramp(25)).is_empty());
    }

    #[test]
    fn test_compute_all() {
        let response = TechnicalIndicatorsResponse::compute("AAPL".to_string(), &ramp(22));
        assert_eq!(response.symbol, "AAPL");
        assert_eq!(response.sma.len(), 3);
        assert_eq!(response.ema.len(), 21);
        assert_eq!(response.rsi.len(), 8);
        assert!(response.macd.is_empty());
    }
}
