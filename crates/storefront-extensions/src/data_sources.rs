//! Named data sources exposed to the host.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::Request;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use storefront_backend::query::product_query_from_params;

/// Configuration of a data source instance, as authored in the host.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfig {
    #[serde(default)]
    pub configuration: Value,
}

/// Context of one data source invocation.
#[derive(Clone)]
pub struct DataSourceContext {
    pub extension: ExtensionContext,
    /// The page request, when the host forwards one.
    pub request: Option<Request>,
}

/// The payload a data source hands back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceResult {
    pub data_source_payload: Value,
}

type DataSourceHandler = Box<
    dyn Fn(DataSourceConfig, DataSourceContext) -> BoxFuture<'static, Result<DataSourceResult, ExtensionError>>
        + Send
        + Sync,
>;

/// Named lookup of data source handlers.
pub struct DataSourceRegistry {
    sources: HashMap<String, DataSourceHandler>,
}

impl DataSourceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// The built-in sources.
    pub fn with_default_sources() -> Self {
        let mut registry = Self::new();
        registry.register("storefront/product-list", product_list);
        registry
    }

    /// Register a handler under a source id.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(DataSourceConfig, DataSourceContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<DataSourceResult, ExtensionError>> + Send + 'static,
    {
        self.sources.insert(
            name.into(),
            Box::new(move |config, context| handler(config, context).boxed()),
        );
    }

    /// Run the named source.
    pub async fn run(
        &self,
        name: &str,
        config: DataSourceConfig,
        context: DataSourceContext,
    ) -> Result<DataSourceResult, ExtensionError> {
        let handler = self
            .sources
            .get(name)
            .ok_or_else(|| ExtensionError::UnknownDataSource(name.to_string()))?;
        handler(config, context).await
    }

    /// The registered source ids.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl Default for DataSourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `storefront/product-list`: a product query assembled from the request's
/// parameters with the source configuration as defaults.
async fn product_list(
    config: DataSourceConfig,
    context: DataSourceContext,
) -> Result<DataSourceResult, ExtensionError> {
    let locale = match &context.request {
        Some(request) => context.extension.resolve_locale(request),
        None => context.extension.default_locale().clone(),
    };
    let params = context
        .request
        .as_ref()
        .map(|request| request.query.clone())
        .unwrap_or_default();

    let query = product_query_from_params(&params, Some(&config.configuration));
    let result = context.extension.product_service(locale).query(&query).await?;

    Ok(DataSourceResult {
        data_source_payload: serde_json::to_value(result)?,
    })
}
