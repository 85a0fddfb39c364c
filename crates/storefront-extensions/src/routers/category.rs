//! Category listing page router.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use crate::resolver::{PageMatcher, ResolvedPage};
use async_trait::async_trait;
use serde_json::json;
use storefront_domain::query::{CategoryQuery, ProductQuery};
use tracing::debug;

/// Catch-all matcher resolving any non-empty path as a category slug.
///
/// Must be consulted last: every other matcher's pattern is a subset of
/// this one.
pub struct CategoryRouter;

impl CategoryRouter {
    /// The candidate category slug: the first non-empty path segment.
    pub fn slug_from_path(path: &str) -> Option<&str> {
        let slug = path.trim_start_matches('/').split('/').next().unwrap_or("");
        (!slug.is_empty()).then_some(slug)
    }
}

#[async_trait]
impl PageMatcher for CategoryRouter {
    fn identify(&self, request: &Request) -> bool {
        request
            .storefront_path()
            .and_then(Self::slug_from_path)
            .is_some()
    }

    async fn load(
        &self,
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<Option<ResolvedPage>, ExtensionError> {
        let Some(path) = request.storefront_path().map(String::from) else {
            return Ok(None);
        };
        let Some(slug) = Self::slug_from_path(&path) else {
            return Ok(None);
        };

        let locale = context.resolve_locale(request);
        let service = context.product_service(locale);

        let categories = service
            .query_categories(&CategoryQuery {
                slug: Some(slug.to_string()),
                limit: Some(1),
            })
            .await?;
        let Some(category) = categories.items.into_iter().next() else {
            debug!(slug, "no category for slug");
            return Ok(None);
        };

        let mut query = ProductQuery::by_category(&category.category_id);
        query.cursor = request.query_param("cursor").map(String::from);

        let result = service.query(&query).await?;
        let payload = json!({
            "products": result.items,
            "previousCursor": result.previous_cursor,
            "nextCursor": result.next_cursor,
            "category": path,
        });

        Ok(Some(ResolvedPage::new("storefront/category", payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtensionConfig;
    use crate::request::PATH_HEADER;
    use std::sync::Arc;
    use storefront_backend::test_util::MockBackend;
    use storefront_backend::wire;

    fn request_for(path: &str) -> Request {
        let mut request = Request::default();
        request
            .headers
            .insert(PATH_HEADER.to_string(), path.to_string());
        request
    }

    #[test]
    fn test_identifies_any_path_with_a_segment() {
        assert!(CategoryRouter.identify(&request_for("/shoes")));
        assert!(CategoryRouter.identify(&request_for("/shoes/running")));
        assert!(!CategoryRouter.identify(&request_for("/")));
        assert!(!CategoryRouter.identify(&Request::default()));
    }

    #[tokio::test]
    async fn test_load_resolves_slug_then_queries_products() {
        let backend = Arc::new(MockBackend {
            categories: vec![wire::Category {
                id: "cat-1".to_string(),
                version: 1,
                name: [("en".to_string(), "Shoes".to_string())].into(),
                slug: [("en".to_string(), "shoes".to_string())].into(),
                parent: None,
            }],
            products: vec![wire::ProductProjection {
                id: "prod-1".to_string(),
                version: 1,
                ..wire::ProductProjection::default()
            }],
            ..MockBackend::default()
        });
        let context = ExtensionContext::new(backend.clone(), ExtensionConfig::default());

        let mut request = request_for("/shoes");
        request
            .query
            .insert("cursor".to_string(), "offset:25".to_string());

        let page = CategoryRouter
            .load(&request, &context)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.page_type, "storefront/category");
        assert_eq!(page.data_source_payload["category"], "/shoes");
        assert_eq!(
            page.data_source_payload["products"][0]["productId"],
            "prod-1"
        );

        let args = backend.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(args.filter_query, vec![r#"categories.id:"cat-1""#]);
        assert_eq!(args.offset, 25);
    }

    #[tokio::test]
    async fn test_load_yields_none_for_unknown_slug() {
        let backend = Arc::new(MockBackend::default());
        let context = ExtensionContext::new(backend, ExtensionConfig::default());

        let page = CategoryRouter
            .load(&request_for("/nonexistent"), &context)
            .await
            .unwrap();
        assert!(page.is_none());
    }
}
