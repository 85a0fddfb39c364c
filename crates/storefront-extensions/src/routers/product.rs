//! Product detail page router.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use crate::resolver::{PageMatcher, ResolvedPage};
use async_trait::async_trait;
use serde_json::json;
use storefront_domain::product::Product;
use storefront_domain::query::ProductQuery;
use tracing::debug;

/// Matches `/{slug}/p/{sku}` paths and loads the product by SKU.
pub struct ProductRouter;

impl ProductRouter {
    /// Extract the SKU segment from a `/p/{sku}` path.
    pub fn sku_from_path(path: &str) -> Option<&str> {
        let (_, rest) = path.split_once("/p/")?;
        let sku = rest.split('/').next().unwrap_or("");
        (!sku.is_empty()).then_some(sku)
    }

    /// Load the product a request's path points at.
    pub async fn load_for(
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<Option<Product>, ExtensionError> {
        let Some(sku) = request.storefront_path().and_then(Self::sku_from_path) else {
            return Ok(None);
        };

        debug!(sku, "loading product for path");
        let locale = context.resolve_locale(request);
        let product = context
            .product_service(locale)
            .get_product(&ProductQuery::by_sku(sku))
            .await?;
        Ok(product)
    }
}

#[async_trait]
impl PageMatcher for ProductRouter {
    fn identify(&self, request: &Request) -> bool {
        request
            .storefront_path()
            .and_then(Self::sku_from_path)
            .is_some()
    }

    async fn load(
        &self,
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<Option<ResolvedPage>, ExtensionError> {
        let Some(product) = ProductRouter::load_for(request, context).await? else {
            return Ok(None);
        };

        let canonical_url = product.url.clone();
        let payload = json!({ "product": product });
        Ok(Some(
            ResolvedPage::new("storefront/product-detail-page", payload)
                .with_canonical_url(canonical_url),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PATH_HEADER;

    fn request_for(path: &str) -> Request {
        let mut request = Request::default();
        request
            .headers
            .insert(PATH_HEADER.to_string(), path.to_string());
        request
    }

    #[test]
    fn test_identifies_product_paths() {
        assert!(ProductRouter.identify(&request_for("/red-shoes/p/SKU1")));
        assert!(ProductRouter.identify(&request_for("/p/ABC123")));
    }

    #[test]
    fn test_rejects_other_paths() {
        assert!(!ProductRouter.identify(&request_for("/search")));
        assert!(!ProductRouter.identify(&request_for("/red-shoes")));
        assert!(!ProductRouter.identify(&request_for("/red-shoes/p/")));
        assert!(!ProductRouter.identify(&Request::default()));
    }

    #[test]
    fn test_sku_extraction_stops_at_next_segment() {
        assert_eq!(
            ProductRouter::sku_from_path("/red-shoes/p/SKU1/extra"),
            Some("SKU1")
        );
    }
}
