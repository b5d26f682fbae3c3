//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::error;

use crate::error::{AppError, Result};
use crate::models::{Country, HealthResponse, SearchQuery};
use crate::service::CountryService;

/// Upper bound on a single search, including any upstream call.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed country lookup
    pub service: Arc<CountryService>,
    /// Upper bound on a single search
    pub search_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around the given service with [`SEARCH_TIMEOUT`].
    pub fn new(service: CountryService) -> Self {
        Self {
            service: Arc::new(service),
            search_timeout: SEARCH_TIMEOUT,
        }
    }

    /// Overrides the per-search time limit.
    pub fn with_search_timeout(mut self, search_timeout: Duration) -> Self {
        self.search_timeout = search_timeout;
        self
    }
}

/// Handler for GET /api/countries/search?name=...
///
/// Returns normalized metadata for the best match.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Country>> {
    let name = query.validate().map_err(AppError::InvalidRequest)?;

    let country = tokio::time::timeout(state.search_timeout, state.service.search_country(name))
        .await
        .map_err(|_| AppError::Timeout)?
        .map_err(|e| {
            error!(name, error = %e, "Error searching for country");
            e
        })?;

    Ok(Json(Country::clone(&country)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
