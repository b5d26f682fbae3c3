//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream REST Countries endpoint.
pub const DEFAULT_REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Upstream HTTP timeout in seconds
    pub timeout: u64,
    /// Base URL of the REST Countries API
    pub rest_countries_url: String,
    /// Lifetime of cached lookup results in seconds
    pub cache_ttl: i64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `TIMEOUT` - Upstream HTTP timeout in seconds (default: 10)
    /// - `REST_COUNTRIES_URL` - Upstream base URL (default: REST Countries v3.1)
    /// - `CACHE_TTL` - Cached result lifetime in seconds, 0 or less disables expiry (default: 3600)
    ///
    /// Unset, empty or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_env("PORT").unwrap_or(defaults.server_port),
            timeout: parse_env("TIMEOUT").unwrap_or(defaults.timeout),
            rest_countries_url: env::var("REST_COUNTRIES_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.rest_countries_url),
            cache_ttl: parse_env("CACHE_TTL").unwrap_or(defaults.cache_ttl),
        }
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            timeout: 10,
            rest_countries_url: DEFAULT_REST_COUNTRIES_URL.to_string(),
            cache_ttl: 3600,
        }
    }
}
