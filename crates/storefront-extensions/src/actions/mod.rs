//! Named actions exposed to the host, grouped by namespace.

pub mod cart;
pub mod product;

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::{Request, Response};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;
use std::future::Future;

type ActionHandler = Box<
    dyn Fn(Request, ExtensionContext) -> BoxFuture<'static, Result<Response, ExtensionError>>
        + Send
        + Sync,
>;

/// Two-level lookup of action handlers: namespace, then action name.
pub struct ActionRegistry {
    namespaces: HashMap<String, HashMap<String, ActionHandler>>,
}

impl ActionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            namespaces: HashMap::new(),
        }
    }

    /// The built-in product and cart namespaces.
    pub fn with_default_actions() -> Self {
        let mut registry = Self::new();

        registry.register("product", "getProduct", product::get_product);
        registry.register("product", "query", product::query);
        registry.register("product", "queryCategories", product::query_categories);
        registry.register(
            "product",
            "getSearchableAttributes",
            product::get_searchable_attributes,
        );

        registry.register("cart", "getCart", cart::get_cart);
        registry.register("cart", "addToCart", cart::add_to_cart);
        registry.register("cart", "updateLineItem", cart::update_line_item);
        registry.register("cart", "removeLineItem", cart::remove_line_item);
        registry.register("cart", "setEmail", cart::set_email);
        registry.register("cart", "setShippingAddress", cart::set_shipping_address);
        registry.register("cart", "setBillingAddress", cart::set_billing_address);
        registry.register("cart", "setShippingMethod", cart::set_shipping_method);
        registry.register("cart", "checkout", cart::checkout);
        registry.register("cart", "getShippingMethods", cart::get_shipping_methods);
        registry.register(
            "cart",
            "getAvailableShippingMethods",
            cart::get_available_shipping_methods,
        );
        registry.register("cart", "addPayment", cart::add_payment);
        registry.register("cart", "updatePayment", cart::update_payment);

        registry
    }

    /// Register a handler under a namespace and action name.
    pub fn register<F, Fut>(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        handler: F,
    ) where
        F: Fn(Request, ExtensionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, ExtensionError>> + Send + 'static,
    {
        self.namespaces.entry(namespace.into()).or_default().insert(
            name.into(),
            Box::new(move |request, context| handler(request, context).boxed()),
        );
    }

    /// Run the named action.
    pub async fn run(
        &self,
        namespace: &str,
        name: &str,
        request: Request,
        context: ExtensionContext,
    ) -> Result<Response, ExtensionError> {
        let handler = self
            .namespaces
            .get(namespace)
            .and_then(|actions| actions.get(name))
            .ok_or_else(|| {
                ExtensionError::UnknownAction(namespace.to_string(), name.to_string())
            })?;
        handler(request, context).await
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtensionConfig;
    use std::sync::Arc;
    use storefront_backend::test_util::MockBackend;

    #[tokio::test]
    async fn test_unknown_action_is_an_error() {
        let registry = ActionRegistry::with_default_actions();
        let context =
            ExtensionContext::new(Arc::new(MockBackend::default()), ExtensionConfig::default());

        let error = registry
            .run("wishlist", "addToWishlist", Request::default(), context)
            .await
            .unwrap_err();
        assert!(matches!(error, ExtensionError::UnknownAction(_, _)));
    }

    #[tokio::test]
    async fn test_custom_registration_is_callable() {
        let mut registry = ActionRegistry::new();
        registry.register("demo", "ping", |request: Request, _context| async move {
            Response::json(200, &"pong", request.session_data)
        });

        let context =
            ExtensionContext::new(Arc::new(MockBackend::default()), ExtensionConfig::default());
        let response = registry
            .run("demo", "ping", Request::default(), context)
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "\"pong\"");
    }
}
