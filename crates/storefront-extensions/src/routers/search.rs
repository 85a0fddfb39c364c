//! Search results page router.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use crate::resolver::{PageMatcher, ResolvedPage};
use async_trait::async_trait;
use serde_json::json;
use storefront_backend::query::product_query_from_params;

/// Matches `/search` paths and runs a product query built from the
/// request's `query`/`q` parameter.
pub struct SearchRouter;

#[async_trait]
impl PageMatcher for SearchRouter {
    fn identify(&self, request: &Request) -> bool {
        request
            .storefront_path()
            .is_some_and(|path| path.starts_with("/search"))
    }

    async fn load(
        &self,
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<Option<ResolvedPage>, ExtensionError> {
        let locale = context.resolve_locale(request);
        let query = product_query_from_params(&request.query, None);

        let result = context.product_service(locale).query(&query).await?;
        let page_matching_payload = json!({ "query": result.query });
        let data_source_payload = serde_json::to_value(&result)?;

        Ok(Some(ResolvedPage {
            page_type: "storefront/search".to_string(),
            data_source_payload,
            page_matching_payload,
            canonical_url: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtensionConfig;
    use crate::request::PATH_HEADER;
    use std::sync::Arc;
    use storefront_backend::test_util::MockBackend;

    fn request_for(path: &str) -> Request {
        let mut request = Request::default();
        request
            .headers
            .insert(PATH_HEADER.to_string(), path.to_string());
        request
    }

    #[test]
    fn test_identifies_search_paths_only() {
        assert!(SearchRouter.identify(&request_for("/search")));
        assert!(!SearchRouter.identify(&request_for("/red-shoes/p/SKU1")));
        assert!(!SearchRouter.identify(&request_for("/shoes")));
    }

    #[tokio::test]
    async fn test_load_builds_query_from_q_parameter() {
        let backend = Arc::new(MockBackend::default());
        let context = ExtensionContext::new(backend.clone(), ExtensionConfig::default());

        let mut request = request_for("/search");
        request.query.insert("q".to_string(), "shoe".to_string());

        let page = SearchRouter
            .load(&request, &context)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.page_type, "storefront/search");
        assert_eq!(page.page_matching_payload["query"]["query"], "shoe");

        let args = backend.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(args.text.as_deref(), Some("shoe"));
    }
}
