//! Unit tests for error module.

use super::*;
use axum::body::to_bytes;

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        detail: "Something went wrong".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"detail":"Something went wrong"}"#);
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_unauthenticated_display() {
    assert_eq!(ApiError::Unauthenticated.to_string(), "API key not set");
}

#[test]
fn test_api_error_invalid_api_key_display() {
    assert_eq!(ApiError::InvalidApiKey.to_string(), "Invalid API key");
}

#[test]
fn test_api_error_not_found_display() {
    let error = ApiError::NotFound("ZZZZ".to_string());
    assert_eq!(format!("{}", error), "No data found for symbol ZZZZ");
}

#[test]
fn test_api_error_internal_passes_message_through() {
    let error = ApiError::Internal("connection reset by peer".to_string());
    assert_eq!(format!("{}", error), "connection reset by peer");
}

#[test]
fn test_provider_error_becomes_internal() {
    let error: ApiError = ProviderError::MarketData("bad gateway".to_string()).into();
    assert!(matches!(error, ApiError::Internal(_)));
    assert!(error.to_string().contains("bad gateway"));
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[test]
fn test_api_error_unauthenticated_into_response() {
    let response = ApiError::Unauthenticated.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_api_error_invalid_api_key_into_response() {
    let response = ApiError::InvalidApiKey.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_api_error_not_found_into_response() {
    let response = ApiError::NotFound("AAPL".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_api_error_internal_into_response() {
    let response = ApiError::Internal("Server error".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_api_error_body_carries_detail() {
    let response = ApiError::NotFound("MSFT".to_string()).into_response();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["detail"], "No data found for symbol MSFT");
}
