//! Product namespace actions.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::{Request, Response};
use storefront_backend::query::product_query_from_params;
use storefront_domain::query::{CategoryQuery, ProductQuery};

/// `product/getProduct`: fetch a single product by `id` or `sku` query
/// parameter. A `sku` wins when both are present.
pub async fn get_product(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let locale = context.resolve_locale(&request);

    let mut product_query = ProductQuery::default();
    if let Some(id) = request.query_param("id") {
        product_query.product_ids = Some(vec![id.to_string()]);
    }
    if let Some(sku) = request.query_param("sku") {
        product_query = ProductQuery::by_sku(sku);
    }

    let product = context
        .product_service(locale)
        .get_product(&product_query)
        .await?;

    Response::json(200, &product, request.session_data)
}

/// `product/query`: run a product query assembled from the request's
/// parameters.
pub async fn query(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let locale = context.resolve_locale(&request);
    let product_query = product_query_from_params(&request.query, None);

    let result = context.product_service(locale).query(&product_query).await?;

    Response::json(200, &result, request.session_data)
}

/// `product/queryCategories`: list categories, optionally narrowed to a
/// `slug` parameter.
pub async fn query_categories(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let locale = context.resolve_locale(&request);
    let category_query = CategoryQuery {
        slug: request.query_param("slug").map(String::from),
        limit: request
            .query_param("limit")
            .and_then(|limit| limit.parse().ok()),
    };

    let result = context
        .product_service(locale)
        .query_categories(&category_query)
        .await?;

    Response::json(200, &result, request.session_data)
}

/// `product/getSearchableAttributes`: describe the filterable attributes
/// derived from the backend's product types.
pub async fn get_searchable_attributes(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let locale = context.resolve_locale(&request);

    let fields = context.product_service(locale).searchable_filters().await?;

    Response::json(200, &fields, request.session_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtensionConfig;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use storefront_backend::test_util::MockBackend;
    use storefront_backend::wire;

    fn context_with(backend: Arc<MockBackend>) -> ExtensionContext {
        ExtensionContext::new(backend, ExtensionConfig::default())
    }

    fn projection(sku: &str) -> wire::ProductProjection {
        wire::ProductProjection {
            id: "prod-1".to_string(),
            version: 1,
            name: [("en".to_string(), "Red Shoes".to_string())].into(),
            slug: [("en".to_string(), "red-shoes".to_string())].into(),
            master_variant: Some(wire::ProductVariant {
                id: 1,
                sku: Some(sku.to_string()),
                ..wire::ProductVariant::default()
            }),
            ..wire::ProductProjection::default()
        }
    }

    #[tokio::test]
    async fn test_get_product_by_sku_param() {
        let backend = Arc::new(MockBackend {
            products: vec![projection("SKU1")],
            ..MockBackend::default()
        });

        let mut request = Request {
            session_data: Some(json!({"visitor": 1})),
            ..Request::default()
        };
        request.query.insert("sku".to_string(), "SKU1".to_string());

        let response = get_product(request, context_with(backend.clone()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);

        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload["productId"], "prod-1");
        assert_eq!(response.session_data, Some(json!({"visitor": 1})));

        let args = backend.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(args.filter_query, vec![r#"variants.sku:"SKU1""#]);
    }

    #[tokio::test]
    async fn test_get_product_without_match_returns_null() {
        let backend = Arc::new(MockBackend::default());
        let mut request = Request::default();
        request.query.insert("sku".to_string(), "NOPE".to_string());

        let response = get_product(request, context_with(backend)).await.unwrap();
        assert_eq!(response.body, "null");
    }

    #[tokio::test]
    async fn test_query_echoes_paged_result() {
        let backend = Arc::new(MockBackend {
            products: vec![projection("SKU1")],
            ..MockBackend::default()
        });
        let mut request = Request::default();
        request.query.insert("q".to_string(), "shoe".to_string());

        let response = query(request, context_with(backend)).await.unwrap();
        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload["count"], 1);
        assert_eq!(payload["query"]["query"], "shoe");
    }

    #[tokio::test]
    async fn test_searchable_attributes_maps_product_types() {
        let backend = Arc::new(MockBackend {
            product_types: vec![wire::ProductTypeDefinition {
                id: "pt-1".to_string(),
                name: "shoes".to_string(),
                attributes: vec![wire::AttributeDefinition {
                    name: "color".to_string(),
                    label: [("en".to_string(), "Color".to_string())].into(),
                    attribute_type: wire::AttributeType {
                        name: "lenum".to_string(),
                        element_type: None,
                        values: None,
                    },
                    is_searchable: None,
                }],
            }],
            ..MockBackend::default()
        });

        let response = get_searchable_attributes(Request::default(), context_with(backend))
            .await
            .unwrap();
        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload[0]["field"], "color");
        assert_eq!(payload[0]["type"], "enum");
        assert_eq!(payload[0]["label"], "Color");
    }
}
