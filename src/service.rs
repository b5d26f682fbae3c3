//! Country Service
//!
//! Cache-aside lookup: answer from the cache when possible, otherwise fetch
//! from upstream, normalize, and cache the result.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::cache::ExpiringCache;
use crate::client::CountryClient;
use crate::error::{AppError, Result};
use crate::models::Country;

/// Prefix namespacing country lookups within the cache.
pub const CACHE_KEY_PREFIX: &str = "country:";

/// Cache shared between the service and the sweep task.
pub type CountryCache = ExpiringCache<Arc<Country>>;

// == Country Service ==
#[derive(Debug)]
pub struct CountryService {
    client: CountryClient,
    cache: Arc<CountryCache>,
    cache_ttl: Duration,
}

impl CountryService {
    /// Creates a service storing lookups in `cache` for `cache_ttl`.
    pub fn new(client: CountryClient, cache: Arc<CountryCache>, cache_ttl: Duration) -> Self {
        Self {
            client,
            cache,
            cache_ttl,
        }
    }

    /// Cache key for a search term.
    pub fn cache_key(name: &str) -> String {
        format!("{}{}", CACHE_KEY_PREFIX, name)
    }

    // == Search Country ==
    /// Looks up a country by name, returning the most relevant match.
    pub async fn search_country(&self, name: &str) -> Result<Arc<Country>> {
        info!(name, "Searching for country");

        let key = Self::cache_key(name);
        if let Some(country) = self.cache.get(&key) {
            info!(name, "Country found in cache");
            return Ok(country);
        }

        info!(name, "Country not found in cache, calling API");
        let countries = self.client.search(name).await.map_err(|e| {
            warn!(name, error = %e, "Error fetching country from API");
            e
        })?;

        let Some(first) = countries.into_iter().next() else {
            info!(name, "No country found with name");
            return Err(AppError::NotFound(name.to_string()));
        };

        let country = Arc::new(Country::from(first));
        self.cache
            .set_with_expiration(key, Arc::clone(&country), self.cache_ttl);
        info!(name, "Country data stored in cache");

        Ok(country)
    }
}
