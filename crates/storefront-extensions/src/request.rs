//! Host request and response shapes.

use crate::error::ExtensionError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Header the host uses to carry the storefront path being resolved.
pub const PATH_HEADER: &str = "storefront-path";

/// Header the host uses to carry the request locale.
pub const LOCALE_HEADER: &str = "storefront-locale";

/// An inbound request as handed over by the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// JSON-encoded body for mutating actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Opaque request-scoped session bag, read and echoed back by actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_data: Option<Value>,
}

impl Request {
    /// Get a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| key.to_lowercase() == name_lower)
            .map(|(_, value)| value.as_str())
    }

    /// The storefront path under resolution: the path header when present,
    /// else the `path` query parameter.
    pub fn storefront_path(&self) -> Option<&str> {
        self.header(PATH_HEADER).or_else(|| self.query_param("path"))
    }

    /// The raw locale hint: the `locale` query parameter when present, else
    /// the locale header.
    pub fn locale_hint(&self) -> Option<&str> {
        self.query_param("locale")
            .or_else(|| self.header(LOCALE_HEADER))
    }

    /// Get a value from the session bag.
    pub fn session_value(&self, key: &str) -> Option<&Value> {
        self.session_data.as_ref()?.get(key)
    }

    /// Parse the JSON body into a typed shape.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, ExtensionError> {
        let body = self.body.as_deref().ok_or(ExtensionError::MissingBody)?;
        serde_json::from_str(body).map_err(|e| ExtensionError::InvalidBody(e.to_string()))
    }
}

/// The response an action hands back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON-encoded payload.
    pub body: String,
    /// Session bag to carry forward, when the action touched it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_data: Option<Value>,
}

impl Response {
    /// Build a response with a JSON-encoded payload.
    pub fn json<T: Serialize>(
        status_code: u16,
        payload: &T,
        session_data: Option<Value>,
    ) -> Result<Self, ExtensionError> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(payload)?,
            session_data,
        })
    }
}
