//! Host-facing extension handlers for a headless commerce backend.
//!
//! This crate is the surface a host e-commerce orchestration runtime plugs
//! into. It exposes three independent registries, each injected with the
//! backend client at construction:
//!
//! - **Page resolution** ([`resolver::PageResolver`]): matches a request
//!   path against product, search, static and category routers in fixed
//!   priority order and assembles the page payload.
//! - **Data sources** ([`data_sources::DataSourceRegistry`]): named
//!   data-fetching handlers for page assembly.
//! - **Actions** ([`actions::ActionRegistry`]): named request handlers,
//!   grouped by namespace, for reads and mutations.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_extensions::{Extensions, ExtensionConfig, Request};
//!
//! let extensions = Extensions::new(Arc::new(client), ExtensionConfig::default());
//!
//! let resolution = extensions.resolve_dynamic_page(&request).await?;
//! let response = extensions.run_action("cart", "addToCart", request).await?;
//! ```

pub mod actions;
pub mod context;
pub mod data_sources;
pub mod error;
pub mod request;
pub mod resolver;
pub mod routers;

pub use context::{ExtensionConfig, ExtensionContext};
pub use error::ExtensionError;
pub use request::{Request, Response};
pub use resolver::{PageResolution, PageResolver};

use actions::ActionRegistry;
use data_sources::{DataSourceConfig, DataSourceContext, DataSourceRegistry, DataSourceResult};
use std::sync::Arc;
use storefront_backend::BackendClient;

/// The assembled extension set handed to the host.
pub struct Extensions {
    context: ExtensionContext,
    resolver: PageResolver,
    data_sources: DataSourceRegistry,
    actions: ActionRegistry,
}

impl Extensions {
    /// Assemble the default extension set around a backend client.
    pub fn new(client: Arc<dyn BackendClient>, config: ExtensionConfig) -> Self {
        Self {
            context: ExtensionContext::new(client, config),
            resolver: PageResolver::with_default_matchers(),
            data_sources: DataSourceRegistry::with_default_sources(),
            actions: ActionRegistry::with_default_actions(),
        }
    }

    /// Swap in a custom page resolver.
    pub fn with_resolver(mut self, resolver: PageResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Swap in a custom data-source registry.
    pub fn with_data_sources(mut self, data_sources: DataSourceRegistry) -> Self {
        self.data_sources = data_sources;
        self
    }

    /// Swap in a custom action registry.
    pub fn with_actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    /// The context the handlers run with.
    pub fn context(&self) -> &ExtensionContext {
        &self.context
    }

    /// Resolve a request path to a page.
    pub async fn resolve_dynamic_page(
        &self,
        request: &Request,
    ) -> Result<PageResolution, ExtensionError> {
        self.resolver.resolve(request, &self.context).await
    }

    /// Run a named data source.
    pub async fn run_data_source(
        &self,
        name: &str,
        config: DataSourceConfig,
        request: Option<Request>,
    ) -> Result<DataSourceResult, ExtensionError> {
        let context = DataSourceContext {
            extension: self.context.clone(),
            request,
        };
        self.data_sources.run(name, config, context).await
    }

    /// Run a named action.
    pub async fn run_action(
        &self,
        namespace: &str,
        name: &str,
        request: Request,
    ) -> Result<Response, ExtensionError> {
        self.actions
            .run(namespace, name, request, self.context.clone())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PATH_HEADER;
    use serde_json::{json, Value};
    use storefront_backend::test_util::MockBackend;
    use storefront_backend::wire;

    fn extensions_with(backend: MockBackend) -> Extensions {
        Extensions::new(Arc::new(backend), ExtensionConfig::default())
    }

    fn request_for(path: &str) -> Request {
        let mut request = Request::default();
        request
            .headers
            .insert(PATH_HEADER.to_string(), path.to_string());
        request
    }

    #[tokio::test]
    async fn test_end_to_end_page_resolution() {
        let extensions = extensions_with(MockBackend {
            products: vec![wire::ProductProjection {
                id: "prod-1".to_string(),
                version: 1,
                name: [("en".to_string(), "Red Shoes".to_string())].into(),
                slug: [("en".to_string(), "red-shoes".to_string())].into(),
                master_variant: Some(wire::ProductVariant {
                    id: 1,
                    sku: Some("SKU1".to_string()),
                    ..wire::ProductVariant::default()
                }),
                ..wire::ProductProjection::default()
            }],
            ..MockBackend::default()
        });

        let resolution = extensions
            .resolve_dynamic_page(&request_for("/red-shoes/p/SKU1"))
            .await
            .unwrap();
        assert!(matches!(resolution, PageResolution::Success { .. }));
    }

    #[tokio::test]
    async fn test_end_to_end_action_dispatch() {
        let extensions = extensions_with(MockBackend::default());

        let response = extensions
            .run_action("cart", "getCart", Request::default())
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);

        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload["cartId"], "cart-new");
    }

    #[tokio::test]
    async fn test_end_to_end_data_source() {
        let extensions = extensions_with(MockBackend::default());

        let result = extensions
            .run_data_source(
                "storefront/product-list",
                data_sources::DataSourceConfig {
                    configuration: json!({"limit": 4}),
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(result.data_source_payload["count"], 0);
    }
}
