//! Unit tests for types module.

use super::*;

#[test]
fn test_api_key_request_serialization() {
    let request = ApiKeyRequest {
        api_key: "AIza-test".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"api_key":"AIza-test"}"#
    );
}

#[test]
fn test_stock_analysis_deserialization() {
    let json = r#"{
        "symbol": "AAPL",
        "data": {
            "current_price": 189.5,
            "price_change": -2.25,
            "volume": 48000000,
            "high": 195.1,
            "low": 180.0
        },
        "analysis": "Consolidating."
    }"#;

    let response: StockAnalysisResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.symbol, "AAPL");
    assert_eq!(response.data.volume, 48_000_000);
    assert_eq!(response.data.price_change, -2.25);
    assert_eq!(response.analysis, "Consolidating.");
}

#[test]
fn test_historical_series_deserialization() {
    let json = r#"[
        {"date": "2024-05-01", "price": 150.0, "volume": 500},
        {"date": "2024-05-02", "price": 152.5, "volume": 501}
    ]"#;

    let points: Vec<HistoricalDataPoint> = serde_json::from_str(json).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].date, "2024-05-02");
    assert_eq!(points[1].price, 152.5);
}

#[test]
fn test_market_insights_deserialization() {
    let json = r#"{
        "timestamp": "2024-05-01T12:00:00+00:00",
        "trends": "A\nB",
        "indicators": "C",
        "events": "",
        "opportunities": ""
    }"#;

    let response: MarketInsightsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.trends, "A\nB");
    assert!(response.events.is_empty());
}

#[test]
fn test_error_response_deserialization() {
    let response: ErrorResponse =
        serde_json::from_str(r#"{"detail":"API key not set"}"#).unwrap();
    assert_eq!(response.detail, "API key not set");
}
