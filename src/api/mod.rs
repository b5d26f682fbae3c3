//! API Module
//!
//! HTTP handlers and routing for the country search REST API.
//!
//! # Endpoints
//! - `GET /api/countries/search?name=` - Look up a country by name
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::*;
pub use routes::create_router;
pub use server::{serve_with_grace, SHUTDOWN_GRACE_PERIOD};
