//! Listing query derivation. Independent of the path: every non-empty
//! filter field becomes a parameter, empty fields are omitted entirely.
//! `BTreeMap` keeps the parameter order deterministic.

use super::selection::FilterState;
use contracts::domain::LocationLevel;
use std::collections::BTreeMap;

/// The free-text search is sent as `location` — the parameter name the
/// listing service has always filtered on.
pub const PARAM_SEARCH: &str = "location";
pub const PARAM_MIN_PRICE: &str = "min_price";
pub const PARAM_MAX_PRICE: &str = "max_price";
pub const PARAM_CATEGORY: &str = "category";

pub fn build_query(state: &FilterState) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    let mut put = |key: &str, value: &str| {
        if !value.is_empty() {
            query.insert(key.to_string(), value.to_string());
        }
    };
    put(PARAM_SEARCH, &state.search_text);
    put(PARAM_MIN_PRICE, &state.min_price);
    put(PARAM_MAX_PRICE, &state.max_price);
    if let Some(slug) = state.category_slug() {
        put(PARAM_CATEGORY, slug);
    }
    for level in LocationLevel::ALL {
        if let Some(slug) = state.location(level) {
            put(level.param(), slug);
        }
    }
    query
}

/// Percent-encode a query map into a `k=v&k=v` string.
pub fn encode_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_yields_empty_query() {
        assert!(build_query(&FilterState::default()).is_empty());
    }

    #[test]
    fn test_price_and_search_only() {
        let mut s = FilterState::default();
        s.search_text = "chair".to_string();
        s.min_price = "100".to_string();
        s.max_price = "500".to_string();
        let q = build_query(&s);
        let expected: Vec<(&str, &str)> = vec![
            ("location", "chair"),
            ("max_price", "500"),
            ("min_price", "100"),
        ];
        let got: Vec<(&str, &str)> = q.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_all_location_levels_appear() {
        let mut s = FilterState::default();
        for (level, slug) in [
            (LocationLevel::State, "karnataka"),
            (LocationLevel::District, "mysore-district"),
            (LocationLevel::City, "mysore"),
            (LocationLevel::Locality, "vv-mohalla"),
        ] {
            assert!(s.select_location(level, Some(slug)));
        }
        let q = build_query(&s);
        assert_eq!(q.get("state").map(String::as_str), Some("karnataka"));
        assert_eq!(q.get("locality").map(String::as_str), Some("vv-mohalla"));
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let mut q = BTreeMap::new();
        q.insert("location".to_string(), "office chair".to_string());
        q.insert("state".to_string(), "karnataka".to_string());
        assert_eq!(encode_query(&q), "location=office%20chair&state=karnataka");
    }
}
