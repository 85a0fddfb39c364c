//! Fixed-path pages with static payloads.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use crate::resolver::{PageMatcher, ResolvedPage};
use async_trait::async_trait;
use serde_json::Value;

/// Matches a fixed path prefix and answers with a constant payload.
///
/// Used for pages whose data comes from the host's own data sources rather
/// than from path resolution, e.g. the cart page.
pub struct StaticPathMatcher {
    prefix: String,
    page_type: String,
    payload: Value,
}

impl StaticPathMatcher {
    /// Create a matcher for a path prefix.
    pub fn new(prefix: impl Into<String>, page_type: impl Into<String>, payload: Value) -> Self {
        Self {
            prefix: prefix.into(),
            page_type: page_type.into(),
            payload,
        }
    }
}

#[async_trait]
impl PageMatcher for StaticPathMatcher {
    fn identify(&self, request: &Request) -> bool {
        request
            .storefront_path()
            .is_some_and(|path| path.starts_with(&self.prefix))
    }

    async fn load(
        &self,
        _request: &Request,
        _context: &ExtensionContext,
    ) -> Result<Option<ResolvedPage>, ExtensionError> {
        Ok(Some(ResolvedPage::new(
            self.page_type.clone(),
            self.payload.clone(),
        )))
    }
}
