//! Filter field descriptors derived from backend attribute metadata.

use serde::{Deserialize, Serialize};

/// Describes one searchable/filterable product attribute to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterField {
    /// Attribute name the backend filters on.
    pub field: String,
    /// Normalized attribute type, e.g. "enum", "text", "boolean".
    #[serde(rename = "type")]
    pub field_type: String,
    /// Display label.
    pub label: Option<String>,
    /// Allowed values for enumerated attributes.
    pub values: Option<Vec<FilterFieldValue>>,
}

/// One allowed value of an enumerated filter field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterFieldValue {
    /// The value sent back in filter queries.
    pub value: String,
    /// Display name for the value.
    pub name: Option<String>,
}
