//! Error types for the country search service
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; every variant here originates from request handling or the
//! upstream lookup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// No country matched the search term
    #[error("No country found with name: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream request failed in transport or decoding
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream returned an unexpected status code
    #[error("Upstream returned non-OK status: {0}")]
    UpstreamStatus(u16),

    /// Lookup did not complete in time
    #[error("Lookup timed out")]
    Timeout,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::NotFound(_) => "Country not found".to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Upstream(_) | AppError::UpstreamStatus(_) => {
                "Country lookup is unavailable".to_string()
            }
            AppError::Timeout => "Country lookup timed out".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        };

        (status, Json(ErrorResponse::new(message, status))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
