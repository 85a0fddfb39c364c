//! Product, variant and category records.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale-resolved variant attributes keyed by attribute name.
///
/// Values keep whatever JSON shape the backend produced after localized
/// extraction, so enum attributes stay `{key, label}` pairs and sets stay
/// arrays.
pub type Attributes = HashMap<String, serde_json::Value>;

/// A category reference on a product, or a full category from a
/// category query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend category identifier.
    pub category_id: String,
    /// Locale-resolved display name, when the category was expanded.
    pub name: Option<String>,
    /// Locale-resolved URL slug, when the category was expanded.
    pub slug: Option<String>,
    /// Parent category identifier, when present.
    pub parent_id: Option<String>,
}

impl Category {
    /// Create a bare category reference.
    pub fn reference(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            name: None,
            slug: None,
            parent_id: None,
        }
    }
}

/// A sellable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Variant identifier within the product.
    pub id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Locale-resolved attributes.
    pub attributes: Attributes,
    /// Effective price. A scoped (customer/channel-specific) price always
    /// wins over the standard price.
    pub price: Option<Money>,
    /// Discounted price belonging to whichever price was selected.
    pub discounted_price: Option<Money>,
}

/// A product as exposed to the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend product identifier.
    pub product_id: String,
    /// Opaque backend version token.
    pub version: String,
    /// Locale-resolved name.
    pub name: Option<String>,
    /// Locale-resolved slug.
    pub slug: Option<String>,
    /// Categories the product belongs to.
    pub categories: Vec<Category>,
    /// Variants, master variant first.
    pub variants: Vec<Variant>,
    /// Derived storefront URL, `/{slug}/p/{first-variant-sku}`.
    #[serde(rename = "_url")]
    pub url: Option<String>,
}

impl Product {
    /// Derive the canonical storefront URL for this product.
    ///
    /// Requires a slug and at least one variant with a SKU; products missing
    /// either have no canonical URL.
    pub fn canonical_url(&self) -> Option<String> {
        let slug = self.slug.as_deref()?;
        let sku = self.variants.first().map(|variant| variant.sku.as_str())?;
        Some(format!("/{}/p/{}", slug, sku))
    }
}
