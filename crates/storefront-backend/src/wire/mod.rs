//! Wire models of the commerce backend's API resources.
//!
//! These mirror the backend's JSON shapes closely enough to deserialize its
//! responses; nothing here is exposed to the host. Optional expansions
//! (`Reference::obj`) are `None` unless the query asked for them — mappers
//! must cope with either form.

mod cart;
mod product;

pub use cart::*;
pub use product::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string localized per language tag.
pub type LocalizedString = HashMap<String, String>;

/// A backend money value.
///
/// `fraction_digits` is only present on typed money representations; plain
/// money drafts omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub cent_amount: i64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction_digits: Option<i32>,
}

impl Money {
    pub fn new(cent_amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            cent_amount,
            currency_code: currency_code.into(),
            fraction_digits: None,
        }
    }
}

/// An expandable reference to another resource.
///
/// The backend sends `{typeId, id}` and inlines the referenced resource
/// under `obj` when the query's expand paths cover it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Reference<T> {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj: Option<T>,
}

impl<T> Reference<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: None,
            obj: None,
        }
    }

    pub fn with_obj(mut self, obj: T) -> Self {
        self.obj = Some(obj);
        self
    }
}

/// A plain resource identifier used in request bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub type_id: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: id.into(),
        }
    }
}

/// A page of backend query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub limit: i64,
    pub offset: i64,
    pub count: i64,
    pub total: Option<i64>,
    pub results: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Wrap a result list as a single complete page.
    pub fn of(results: Vec<T>) -> Self {
        Self {
            limit: results.len() as i64,
            offset: 0,
            count: results.len() as i64,
            total: Some(results.len() as i64),
            results,
        }
    }
}
