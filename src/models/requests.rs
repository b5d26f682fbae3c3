//! Request DTOs for the country search API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the search endpoint (GET /api/countries/search)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Country name or partial name to search for
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchQuery {
    /// Validates the query and returns the trimmed search term.
    ///
    /// Returns an error message if the name is missing or blank.
    pub fn validate(&self) -> std::result::Result<&str, String> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err("Name parameter is required".to_string()),
        }
    }
}
