//! Query parameters and paged results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters of a product query against the backend.
///
/// Assembled by the query assembler from raw request parameters and
/// data-source configuration; consumed by the product service and the
/// routers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Restrict to these backend product identifiers.
    pub product_ids: Option<Vec<String>>,
    /// Restrict to products carrying one of these variant SKUs.
    pub skus: Option<Vec<String>>,
    /// Full-text search term.
    pub query: Option<String>,
    /// Term filters, attribute name to required value.
    pub filters: Option<HashMap<String, String>>,
    /// Restrict to products in this category.
    pub category: Option<String>,
    /// Pagination cursor from a previous result.
    pub cursor: Option<String>,
    /// Page size.
    pub limit: Option<i64>,
}

impl ProductQuery {
    /// Query a single product by variant SKU.
    pub fn by_sku(sku: impl Into<String>) -> Self {
        Self {
            skus: Some(vec![sku.into()]),
            ..Self::default()
        }
    }

    /// Query products within a category.
    pub fn by_category(category_id: impl Into<String>) -> Self {
        Self {
            category: Some(category_id.into()),
            ..Self::default()
        }
    }
}

/// Parameters of a category query against the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    /// Restrict to the category with this slug.
    pub slug: Option<String>,
    /// Page size.
    pub limit: Option<i64>,
}

/// A page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// Total matching items, when the backend reports it.
    pub total: Option<i64>,
    /// Cursor to the previous page, when one exists.
    pub previous_cursor: Option<String>,
    /// Cursor to the next page, when one exists.
    pub next_cursor: Option<String>,
    /// Number of items in this page.
    pub count: i64,
    /// The items.
    pub items: Vec<T>,
    /// The query that produced this page, echoed back for the caller.
    pub query: Option<ProductQuery>,
}

/// Encode a page offset as an opaque cursor token.
pub fn offset_cursor(offset: i64) -> String {
    format!("offset:{}", offset)
}

/// Decode a cursor token produced by [`offset_cursor`].
pub fn parse_offset_cursor(cursor: &str) -> Option<i64> {
    cursor.strip_prefix("offset:")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_round_trip() {
        assert_eq!(parse_offset_cursor(&offset_cursor(50)), Some(50));
    }

    #[test]
    fn test_cursor_rejects_garbage() {
        assert_eq!(parse_offset_cursor("page:3"), None);
        assert_eq!(parse_offset_cursor("offset:abc"), None);
    }

    #[test]
    fn test_query_by_sku() {
        let query = ProductQuery::by_sku("SKU1");
        assert_eq!(query.skus.as_deref(), Some(&["SKU1".to_string()][..]));
        assert!(query.category.is_none());
    }
}
