//! Product catalog operations.

use crate::client::{BackendClient, CategoryQueryArgs, ProductSearchArgs};
use crate::error::BackendError;
use crate::mappers::{map_category, map_filter_fields, map_product_projection};
use crate::services::op_context;
use std::sync::Arc;
use storefront_domain::filter::FilterField;
use storefront_domain::product::{Category, Product};
use storefront_domain::query::{
    offset_cursor, parse_offset_cursor, CategoryQuery, PagedResult, ProductQuery,
};
use storefront_domain::Locale;
use tracing::debug;

/// Page size used when a query does not specify one.
pub const DEFAULT_PRODUCT_LIMIT: i64 = 25;

/// Page size for category queries without an explicit limit.
pub const DEFAULT_CATEGORY_LIMIT: i64 = 20;

/// Product operations against the commerce backend, scoped to one
/// request's locale.
pub struct ProductService {
    client: Arc<dyn BackendClient>,
    locale: Locale,
}

impl ProductService {
    /// Create a service for one request.
    pub fn new(client: Arc<dyn BackendClient>, locale: Locale) -> Self {
        Self { client, locale }
    }

    /// Run a product query and map the results.
    ///
    /// Prices are scoped to the locale's currency and country so the
    /// backend selects customer-specific prices where they exist.
    pub async fn query(
        &self,
        product_query: &ProductQuery,
    ) -> Result<PagedResult<Product>, BackendError> {
        op_context("query", async {
            let limit = product_query.limit.unwrap_or(DEFAULT_PRODUCT_LIMIT);
            let offset = product_query
                .cursor
                .as_deref()
                .and_then(parse_offset_cursor)
                .unwrap_or(0);

            let mut filter_query = Vec::new();
            if let Some(ids) = &product_query.product_ids {
                if !ids.is_empty() {
                    filter_query.push(format!(r#"id:"{}""#, ids.join(r#"",""#)));
                }
            }
            if let Some(skus) = &product_query.skus {
                if !skus.is_empty() {
                    filter_query.push(format!(r#"variants.sku:"{}""#, skus.join(r#"",""#)));
                }
            }
            if let Some(category) = &product_query.category {
                filter_query.push(format!(r#"categories.id:"{category}""#));
            }
            if let Some(filters) = &product_query.filters {
                for (field, value) in filters {
                    filter_query.push(format!(r#"{field}:"{value}""#));
                }
            }

            let args = ProductSearchArgs {
                limit,
                offset,
                filter_query,
                text_language: Some(self.locale.language.clone()),
                text: product_query.query.clone(),
                price_currency: Some(self.locale.currency.clone()),
                price_country: Some(self.locale.country.clone()),
            };

            debug!(filters = args.filter_query.len(), offset, limit, "searching products");
            let response = self.client.search_products(&args).await?;

            let items: Vec<Product> = response
                .results
                .iter()
                .map(|projection| map_product_projection(projection, &self.locale))
                .collect();

            let previous_cursor = (offset > 0).then(|| offset_cursor((offset - limit).max(0)));
            let next_cursor = response
                .total
                .filter(|total| offset + response.count < *total)
                .map(|_| offset_cursor(offset + response.count));

            Ok(PagedResult {
                total: response.total,
                previous_cursor,
                next_cursor,
                count: items.len() as i64,
                items,
                query: Some(product_query.clone()),
            })
        })
        .await
    }

    /// Fetch the first product matching a query, or `None`.
    pub async fn get_product(
        &self,
        product_query: &ProductQuery,
    ) -> Result<Option<Product>, BackendError> {
        op_context("get_product", async {
            let result = self.query(product_query).await?;
            Ok(result.items.into_iter().next())
        })
        .await
    }

    /// Query categories, optionally narrowed to a slug.
    pub async fn query_categories(
        &self,
        category_query: &CategoryQuery,
    ) -> Result<PagedResult<Category>, BackendError> {
        op_context("query_categories", async {
            let mut where_clauses = Vec::new();
            if let Some(slug) = &category_query.slug {
                where_clauses.push(format!(r#"slug({}="{}")"#, self.locale.language, slug));
            }

            let args = CategoryQueryArgs {
                limit: category_query.limit.unwrap_or(DEFAULT_CATEGORY_LIMIT),
                where_clauses,
            };

            let response = self.client.query_categories(&args).await?;
            let items: Vec<Category> = response
                .results
                .iter()
                .map(|category| map_category(category, &self.locale))
                .collect();

            Ok(PagedResult {
                total: response.total,
                previous_cursor: None,
                next_cursor: None,
                count: items.len() as i64,
                items,
                query: None,
            })
        })
        .await
    }

    /// Derive filter field descriptors from the backend's product types.
    pub async fn searchable_filters(&self) -> Result<Vec<FilterField>, BackendError> {
        op_context("searchable_filters", async {
            let response = self.client.query_product_types().await?;
            Ok(map_filter_fields(&response.results, &self.locale))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockBackend;
    use crate::wire;

    fn projection(id: &str, sku: &str) -> wire::ProductProjection {
        wire::ProductProjection {
            id: id.to_string(),
            version: 1,
            name: [("en".to_string(), format!("Product {id}"))].into(),
            slug: [("en".to_string(), format!("product-{id}"))].into(),
            master_variant: Some(wire::ProductVariant {
                id: 1,
                sku: Some(sku.to_string()),
                ..wire::ProductVariant::default()
            }),
            ..wire::ProductProjection::default()
        }
    }

    fn service(backend: MockBackend) -> ProductService {
        ProductService::new(Arc::new(backend), Locale::new("en", "US", "USD"))
    }

    #[tokio::test]
    async fn test_query_builds_sku_filter_and_price_scope() {
        let backend = MockBackend {
            products: vec![projection("p1", "SKU1")],
            ..MockBackend::default()
        };
        let backend = Arc::new(backend);
        let service = ProductService::new(backend.clone(), Locale::new("en", "US", "USD"));

        let result = service.query(&ProductQuery::by_sku("SKU1")).await.unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.items[0].variants[0].sku, "SKU1");

        let args = backend.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(args.filter_query, vec![r#"variants.sku:"SKU1""#]);
        assert_eq!(args.price_currency.as_deref(), Some("USD"));
        assert_eq!(args.price_country.as_deref(), Some("US"));
        assert_eq!(args.limit, DEFAULT_PRODUCT_LIMIT);
    }

    #[tokio::test]
    async fn test_query_pages_with_offset_cursors() {
        let backend = MockBackend {
            products: vec![projection("p1", "SKU1")],
            product_total: Some(60),
            ..MockBackend::default()
        };
        let backend = Arc::new(backend);
        let service = ProductService::new(backend.clone(), Locale::new("en", "US", "USD"));

        let query = ProductQuery {
            cursor: Some(offset_cursor(25)),
            ..ProductQuery::default()
        };
        let result = service.query(&query).await.unwrap();

        let args = backend.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(args.offset, 25);
        assert_eq!(result.previous_cursor.as_deref(), Some("offset:0"));
        assert_eq!(result.next_cursor.as_deref(), Some("offset:26"));
    }

    #[tokio::test]
    async fn test_get_product_returns_first_match() {
        let service = service(MockBackend {
            products: vec![projection("p1", "SKU1"), projection("p2", "SKU2")],
            ..MockBackend::default()
        });

        let product = service
            .get_product(&ProductQuery::by_sku("SKU1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.product_id, "p1");
    }

    #[tokio::test]
    async fn test_get_product_yields_none_for_no_match() {
        let service = service(MockBackend::default());
        let product = service
            .get_product(&ProductQuery::by_sku("MISSING"))
            .await
            .unwrap();
        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_query_categories_maps_localized_fields() {
        let service = service(MockBackend {
            categories: vec![wire::Category {
                id: "cat-1".to_string(),
                version: 1,
                name: [("en".to_string(), "Shoes".to_string())].into(),
                slug: [("en".to_string(), "shoes".to_string())].into(),
                parent: None,
            }],
            ..MockBackend::default()
        });

        let result = service
            .query_categories(&CategoryQuery {
                slug: Some("shoes".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(result.items[0].category_id, "cat-1");
        assert_eq!(result.items[0].name.as_deref(), Some("Shoes"));
        assert_eq!(result.items[0].slug.as_deref(), Some("shoes"));
    }
}
