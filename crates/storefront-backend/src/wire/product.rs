//! Product catalog wire types.

use super::{LocalizedString, Money, Reference};
use serde::{Deserialize, Serialize};

/// A product projection as returned by the backend's search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductProjection {
    pub id: String,
    pub version: i64,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub slug: LocalizedString,
    #[serde(default)]
    pub categories: Vec<Reference<Category>>,
    pub master_variant: Option<ProductVariant>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// A category resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub version: i64,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub slug: LocalizedString,
    pub parent: Option<Box<Reference<Category>>>,
}

/// A product variant on a projection or line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: i64,
    pub sku: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Standard price selected for the query's price scope.
    pub price: Option<Price>,
    /// Customer/channel-specific price. Takes precedence over `price`.
    pub scoped_price: Option<ScopedPrice>,
}

/// A variant image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub label: Option<String>,
}

/// A raw variant attribute; the value shape depends on the attribute type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub value: serde_json::Value,
}

/// A standard price with optional discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: Option<String>,
    pub value: Money,
    pub discounted: Option<DiscountedPrice>,
}

/// The discounted part of a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedPrice {
    pub value: Money,
}

/// A customer/channel-scoped price with optional discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScopedPrice {
    pub value: Money,
    pub discounted: Option<DiscountedPrice>,
}

/// A product type with its attribute definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

/// The definition of one product attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(default)]
    pub label: LocalizedString,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub is_searchable: Option<bool>,
}

/// An attribute type, possibly a "set" wrapping an element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub name: String,
    pub element_type: Option<Box<AttributeType>>,
    /// Allowed values for (localized) enum types.
    pub values: Option<Vec<EnumValue>>,
}

/// One allowed value of an enum attribute type.
///
/// The label is a plain string for `enum` and a localized mapping for
/// `lenum`, so it stays raw JSON here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub key: String,
    pub label: serde_json::Value,
}
