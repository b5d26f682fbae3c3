//! Upstream DTOs
//!
//! Subset of the REST Countries v3.1 payload the service reads, plus the
//! normalization into [`Country`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::Country;

/// One element of the REST Countries `/name/{name}` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    pub name: RestCountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    /// Keyed by ISO 4217 currency code
    #[serde(default)]
    pub currencies: BTreeMap<String, RestCurrency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCurrency {
    #[serde(default)]
    pub symbol: String,
}

impl From<RestCountry> for Country {
    fn from(country: RestCountry) -> Self {
        // BTreeMap ordering makes "first currency" the lowest currency code
        let currency = country
            .currencies
            .into_values()
            .next()
            .map(|c| c.symbol)
            .unwrap_or_default();

        Self {
            name: country.name.common,
            capital: country.capital.into_iter().next().unwrap_or_default(),
            currency,
            population: country.population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_payload() {
        let json = r#"{
            "name": {"common": "Switzerland", "official": "Swiss Confederation"},
            "capital": ["Bern"],
            "population": 8654622,
            "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}}
        }"#;
        let country: Country = serde_json::from_str::<RestCountry>(json).unwrap().into();

        assert_eq!(country.name, "Switzerland");
        assert_eq!(country.capital, "Bern");
        assert_eq!(country.currency, "Fr.");
        assert_eq!(country.population, 8_654_622);
    }

    #[test]
    fn test_unread_upstream_fields_are_ignored() {
        let json = r#"{
            "name": {"common": "Peru", "official": "Republic of Peru", "nativeName": {}},
            "capital": ["Lima"],
            "population": 32971846,
            "currencies": {"PEN": {"name": "Peruvian sol", "symbol": "S/"}},
            "region": "Americas"
        }"#;
        let country: Country = serde_json::from_str::<RestCountry>(json).unwrap().into();

        assert_eq!(country.name, "Peru");
        assert_eq!(country.currency, "S/");
    }

    #[test]
    fn test_normalize_missing_capital_and_currency() {
        let json = r#"{"name": {"common": "Antarctica"}, "population": 1000}"#;
        let country: Country = serde_json::from_str::<RestCountry>(json).unwrap().into();

        assert_eq!(country.name, "Antarctica");
        assert_eq!(country.capital, "");
        assert_eq!(country.currency, "");
    }

    #[test]
    fn test_first_currency_is_lowest_code() {
        let json = r#"{
            "name": {"common": "Zimbabwe"},
            "capital": ["Harare"],
            "currencies": {
                "ZWL": {"name": "Zimbabwean dollar", "symbol": "$"},
                "BWP": {"name": "Botswanan pula", "symbol": "P"}
            }
        }"#;
        let country: Country = serde_json::from_str::<RestCountry>(json).unwrap().into();

        assert_eq!(country.currency, "P");
    }
}
