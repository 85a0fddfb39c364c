//! Dynamic page resolution.
//!
//! Matchers are tried strictly in registration order and the first whose
//! `identify` claims the request is given control; there is no
//! backtracking. The order is correctness-critical because the category
//! matcher is a catch-all that would shadow everything after it.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use crate::routers::{CategoryRouter, ProductRouter, SearchRouter, StaticPathMatcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// The outcome of resolving a request path to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum PageResolution {
    /// A matcher claimed the request and produced page data.
    Success {
        page_type: String,
        data_source_payload: Value,
        page_matching_payload: Value,
    },
    /// The matched record's canonical URL disagrees with the requested
    /// path.
    Redirect { status_code: u16, location: String },
    /// No matcher claimed the request; the host decides final handling.
    NotFound,
}

/// Page data produced by a matcher's loader.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    /// Host page type, e.g. "storefront/product-detail-page".
    pub page_type: String,
    /// Payload handed to the page's data sources.
    pub data_source_payload: Value,
    /// Payload the host matches page templates against.
    pub page_matching_payload: Value,
    /// Canonical URL of the loaded record, when it has one. A mismatch
    /// with the requested path turns into a 301 redirect.
    pub canonical_url: Option<String>,
}

impl ResolvedPage {
    /// A page whose data-source and matching payloads are the same.
    pub fn new(page_type: impl Into<String>, payload: Value) -> Self {
        Self {
            page_type: page_type.into(),
            data_source_payload: payload.clone(),
            page_matching_payload: payload,
            canonical_url: None,
        }
    }

    /// Attach the record's canonical URL.
    pub fn with_canonical_url(mut self, url: Option<String>) -> Self {
        self.canonical_url = url;
        self
    }
}

/// A path matcher with its loader.
#[async_trait]
pub trait PageMatcher: Send + Sync {
    /// Pure path-pattern test; must not perform I/O.
    fn identify(&self, request: &Request) -> bool;

    /// Load the page data. Only invoked after `identify` returned true;
    /// `None` means the path matched but the backend had nothing for it.
    async fn load(
        &self,
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<Option<ResolvedPage>, ExtensionError>;
}

/// Tries matchers in fixed priority order and turns the winner's data into
/// a [`PageResolution`].
pub struct PageResolver {
    matchers: Vec<Box<dyn PageMatcher>>,
}

impl PageResolver {
    /// An empty resolver; matchers are tried in registration order.
    pub fn new() -> Self {
        Self { matchers: vec![] }
    }

    /// The standard matcher order: product, search, static pages, then the
    /// category catch-all last.
    pub fn with_default_matchers() -> Self {
        Self::new()
            .matcher(ProductRouter)
            .matcher(SearchRouter)
            .matcher(StaticPathMatcher::new(
                "/cart",
                "storefront/cart",
                serde_json::json!({}),
            ))
            .matcher(CategoryRouter)
    }

    /// Append a matcher at the lowest priority so far.
    pub fn matcher(mut self, matcher: impl PageMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Resolve a request in a single sequential pass.
    pub async fn resolve(
        &self,
        request: &Request,
        context: &ExtensionContext,
    ) -> Result<PageResolution, ExtensionError> {
        for (index, matcher) in self.matchers.iter().enumerate() {
            if !matcher.identify(request) {
                continue;
            }

            debug!(matcher = index, path = ?request.storefront_path(), "matcher claimed request");
            let Some(page) = matcher.load(request, context).await? else {
                return Ok(PageResolution::NotFound);
            };

            if let (Some(canonical), Some(requested)) =
                (&page.canonical_url, request.storefront_path())
            {
                if canonical != requested {
                    return Ok(PageResolution::Redirect {
                        status_code: 301,
                        location: canonical.clone(),
                    });
                }
            }

            return Ok(PageResolution::Success {
                page_type: page.page_type,
                data_source_payload: page.data_source_payload,
                page_matching_payload: page.page_matching_payload,
            });
        }

        Ok(PageResolution::NotFound)
    }
}

impl Default for PageResolver {
    fn default() -> Self {
        Self::new()
    }
}
