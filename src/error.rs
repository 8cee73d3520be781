//! Error types for the REST API.

use crate::providers::ProviderError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No language model credential has been submitted yet.
    #[error("API key not set")]
    Unauthenticated,

    /// The submitted credential failed its trial call.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The market data provider returned no rows for the symbol.
    #[error("No data found for symbol {0}")]
    NotFound(String),

    /// Any other failure. The message is passed through to the client.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
