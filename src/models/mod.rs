//! Request, response and upstream models for the country search API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP bodies and the upstream payload.

pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use requests::SearchQuery;
pub use responses::{Country, ErrorResponse, HealthResponse};
pub use upstream::RestCountry;
