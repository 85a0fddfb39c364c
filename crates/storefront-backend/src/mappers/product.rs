//! Product projection mapping.

use crate::wire;
use serde_json::Value;
use storefront_domain::product::{Attributes, Category, Product, Variant};
use storefront_domain::{Locale, Money};

/// Map a backend money value, defaulting fraction digits to 2 when the
/// source omits them.
pub fn map_money(money: &wire::Money) -> Money {
    Money {
        cent_amount: money.cent_amount,
        currency_code: money.currency_code.clone(),
        fraction_digits: money
            .fraction_digits
            .unwrap_or(storefront_domain::money::DEFAULT_FRACTION_DIGITS),
    }
}

/// Map a product projection into a storefront product.
pub fn map_product_projection(projection: &wire::ProductProjection, locale: &Locale) -> Product {
    let mut product = Product {
        product_id: projection.id.clone(),
        version: projection.version.to_string(),
        name: localized(&projection.name, locale),
        slug: localized(&projection.slug, locale),
        categories: map_categories(&projection.categories),
        variants: map_variants(projection, locale),
        url: None,
    };
    product.url = product.canonical_url();
    product
}

/// Flatten master variant and additional variants into one sequence,
/// master first, then declaration order.
pub fn map_variants(projection: &wire::ProductProjection, locale: &Locale) -> Vec<Variant> {
    let mut variants = Vec::with_capacity(projection.variants.len() + 1);

    if let Some(master) = &projection.master_variant {
        variants.push(map_variant(master, locale));
    }
    for variant in &projection.variants {
        variants.push(map_variant(variant, locale));
    }

    variants
}

/// Map a single variant.
pub fn map_variant(variant: &wire::ProductVariant, locale: &Locale) -> Variant {
    let (price, discounted_price) = extract_price_and_discounted_price(variant);

    Variant {
        id: variant.id.to_string(),
        sku: variant.sku.clone().unwrap_or_default(),
        images: variant.images.iter().map(|image| image.url.clone()).collect(),
        attributes: map_attributes(&variant.attributes, locale),
        price,
        discounted_price,
    }
}

/// Map raw attributes into a locale-resolved attribute map.
pub fn map_attributes(attributes: &[wire::Attribute], locale: &Locale) -> Attributes {
    attributes
        .iter()
        .map(|attribute| {
            (
                attribute.name.clone(),
                extract_attribute_value(&attribute.value, locale),
            )
        })
        .collect()
}

/// Map category references; unexpanded references keep only the id.
pub fn map_categories(categories: &[wire::Reference<wire::Category>]) -> Vec<Category> {
    categories
        .iter()
        .map(|reference| Category::reference(&reference.id))
        .collect()
}

/// Map a full category resource, resolving name and slug for the locale.
pub fn map_category(category: &wire::Category, locale: &Locale) -> Category {
    Category {
        category_id: category.id.clone(),
        name: localized(&category.name, locale),
        slug: localized(&category.slug, locale),
        parent_id: category.parent.as_ref().map(|parent| parent.id.clone()),
    }
}

/// Resolve a localized attribute value.
///
/// `{key, label}` pairs recurse into the label, sequences map element-wise,
/// and mappings keyed by language tag yield the entry for the locale's
/// language. A mapping without that language falls back to the raw value
/// unchanged; the fallback is deliberate, not an error.
pub fn extract_attribute_value(value: &Value, locale: &Locale) -> Value {
    if let Some(object) = value.as_object() {
        if object.contains_key("key") && object.contains_key("label") {
            return serde_json::json!({
                "key": object["key"],
                "label": extract_attribute_value(&object["label"], locale),
            });
        }

        if let Some(entry) = object.get(&locale.language) {
            return entry.clone();
        }
        return value.clone();
    }

    if let Some(sequence) = value.as_array() {
        return Value::Array(
            sequence
                .iter()
                .map(|element| extract_attribute_value(element, locale))
                .collect(),
        );
    }

    value.clone()
}

/// Extract the effective price and its discount from a variant.
///
/// A scoped (customer/channel-specific) price always wins over the standard
/// price; with neither present both results are `None`.
pub fn extract_price_and_discounted_price(
    variant: &wire::ProductVariant,
) -> (Option<Money>, Option<Money>) {
    if let Some(scoped) = &variant.scoped_price {
        return (
            Some(map_money(&scoped.value)),
            scoped.discounted.as_ref().map(|d| map_money(&d.value)),
        );
    }

    if let Some(price) = &variant.price {
        return (
            Some(map_money(&price.value)),
            price.discounted.as_ref().map(|d| map_money(&d.value)),
        );
    }

    (None, None)
}

fn localized(value: &wire::LocalizedString, locale: &Locale) -> Option<String> {
    value.get(&locale.language).cloned()
}
