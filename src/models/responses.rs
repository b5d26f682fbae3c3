//! Response DTOs for the country search API
//!
//! Defines the structure of outgoing HTTP response bodies.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Normalized country metadata returned by the search endpoint.
///
/// This is also the value type held in the lookup cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Common name of the country
    pub name: String,
    /// First listed capital, empty if none
    pub capital: String,
    /// Symbol of the first listed currency, empty if none
    pub currency: String,
    /// Population count
    pub population: u64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub message: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
        }
    }
}
