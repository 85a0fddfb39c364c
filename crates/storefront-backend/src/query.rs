//! Query assembler: raw request parameters into a structured product query.

use serde_json::Value;
use std::collections::HashMap;
use storefront_domain::query::ProductQuery;

/// Prefix marking request parameters that become term filters.
const FILTER_PARAM_PREFIX: &str = "filter.";

/// Build a [`ProductQuery`] from raw request query parameters and optional
/// data-source configuration.
///
/// Configuration values act as defaults; a parameter present on the request
/// always wins. List-valued inputs accept both comma-separated strings (on
/// the request) and JSON arrays (in configuration).
pub fn product_query_from_params(
    params: &HashMap<String, String>,
    config: Option<&Value>,
) -> ProductQuery {
    let query = params
        .get("query")
        .or_else(|| params.get("q"))
        .cloned()
        .or_else(|| config_string(config, "query"));

    let mut filters: HashMap<String, String> = params
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(FILTER_PARAM_PREFIX)
                .map(|field| (field.to_string(), value.clone()))
        })
        .collect();
    if let Some(configured) = config_string_map(config, "filters") {
        for (field, value) in configured {
            filters.entry(field).or_insert(value);
        }
    }

    ProductQuery {
        product_ids: list_param(params, config, "productIds"),
        skus: list_param(params, config, "skus"),
        query,
        filters: (!filters.is_empty()).then_some(filters),
        category: params
            .get("category")
            .cloned()
            .or_else(|| config_string(config, "category")),
        cursor: params.get("cursor").cloned(),
        limit: params
            .get("limit")
            .and_then(|limit| limit.parse().ok())
            .or_else(|| config_i64(config, "limit")),
    }
}

fn list_param(
    params: &HashMap<String, String>,
    config: Option<&Value>,
    key: &str,
) -> Option<Vec<String>> {
    if let Some(raw) = params.get(key) {
        let items: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
        return (!items.is_empty()).then_some(items);
    }

    let configured = config?.get(key)?;
    match configured {
        Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect();
            (!items.is_empty()).then_some(items)
        }
        Value::String(raw) => {
            let items: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
            (!items.is_empty()).then_some(items)
        }
        _ => None,
    }
}

fn config_string(config: Option<&Value>, key: &str) -> Option<String> {
    config?.get(key)?.as_str().map(String::from)
}

fn config_i64(config: Option<&Value>, key: &str) -> Option<i64> {
    config?.get(key)?.as_i64()
}

fn config_string_map(config: Option<&Value>, key: &str) -> Option<HashMap<String, String>> {
    let object = config?.get(key)?.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(field, value)| {
                value.as_str().map(|value| (field.clone(), value.to_string()))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_query_falls_back_to_q() {
        let query = product_query_from_params(&params(&[("q", "shoe")]), None);
        assert_eq!(query.query.as_deref(), Some("shoe"));
    }

    #[test]
    fn test_request_params_win_over_config() {
        let config = json!({"category": "configured", "limit": 10});
        let query =
            product_query_from_params(&params(&[("category", "requested")]), Some(&config));
        assert_eq!(query.category.as_deref(), Some("requested"));
        assert_eq!(query.limit, Some(10));
    }

    #[test]
    fn test_comma_separated_skus() {
        let query = product_query_from_params(&params(&[("skus", "SKU1, SKU2")]), None);
        assert_eq!(
            query.skus,
            Some(vec!["SKU1".to_string(), "SKU2".to_string()])
        );
    }

    #[test]
    fn test_config_array_skus() {
        let config = json!({"skus": ["SKU1", "SKU2"]});
        let query = product_query_from_params(&HashMap::new(), Some(&config));
        assert_eq!(
            query.skus,
            Some(vec!["SKU1".to_string(), "SKU2".to_string()])
        );
    }

    #[test]
    fn test_filter_params_are_collected() {
        let query =
            product_query_from_params(&params(&[("filter.color", "red"), ("cursor", "offset:25")]), None);
        let filters = query.filters.unwrap();
        assert_eq!(filters.get("color").map(String::as_str), Some("red"));
        assert_eq!(query.cursor.as_deref(), Some("offset:25"));
    }
}
