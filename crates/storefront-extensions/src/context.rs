//! Extension context: the injected collaborators and configuration.

use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_backend::{BackendClient, CartService, ProductService};
use storefront_domain::Locale;

/// Static configuration of the extension set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    /// Locale used when a request carries no usable locale hint.
    pub default_locale: Locale,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::new("en", "US", "USD"),
        }
    }
}

/// The capability bundle handed to routers, data sources and actions:
/// the backend client plus configuration. Cheap to clone; holds no
/// request state.
#[derive(Clone)]
pub struct ExtensionContext {
    client: Arc<dyn BackendClient>,
    config: Arc<ExtensionConfig>,
}

impl ExtensionContext {
    /// Create a context around a backend client.
    pub fn new(client: Arc<dyn BackendClient>, config: ExtensionConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    /// The configured default locale.
    pub fn default_locale(&self) -> &Locale {
        &self.config.default_locale
    }

    /// Resolve the locale for a request.
    ///
    /// The explicit `locale` query parameter wins, then the locale header,
    /// then the configured default. Never fails: parts missing from the
    /// hint fall back to the default locale's parts.
    pub fn resolve_locale(&self, request: &Request) -> Locale {
        match request.locale_hint() {
            Some(raw) => Locale::parse(raw).or_default(&self.config.default_locale),
            None => self.config.default_locale.clone(),
        }
    }

    /// Product operations scoped to a locale.
    pub fn product_service(&self, locale: Locale) -> ProductService {
        ProductService::new(self.client.clone(), locale)
    }

    /// Cart operations scoped to a locale.
    pub fn cart_service(&self, locale: Locale) -> CartService {
        CartService::new(self.client.clone(), locale)
    }
}
