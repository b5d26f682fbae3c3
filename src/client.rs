//! REST Countries Client
//!
//! Thin HTTP client for the upstream country API.

use std::time::Duration;

use reqwest::{header::ACCEPT, StatusCode, Url};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::RestCountry;

// == Country Client ==
/// HTTP client bound to one REST Countries base URL.
#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CountryClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Internal(format!("Invalid upstream URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "Upstream URL '{}' cannot be used as a base",
                base_url
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, http })
    }

    /// Builds `{base_url}/name/{name}` with `name` percent-encoded as one segment.
    fn search_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("name").push(name);
        }
        url
    }

    // == Search ==
    /// Searches countries by (partial) name.
    ///
    /// Returns the upstream array as-is; it may be empty.
    pub async fn search(&self, name: &str) -> Result<Vec<RestCountry>> {
        let url = self.search_url(name);
        debug!("Calling upstream: {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Vec<RestCountry>>().await?),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(name.to_string())),
            status => Err(AppError::UpstreamStatus(status.as_u16())),
        }
    }
}
