//! Filter field derivation from product type metadata.

use crate::mappers::product::extract_attribute_value;
use crate::wire;
use std::collections::HashSet;
use storefront_domain::filter::{FilterField, FilterFieldValue};
use storefront_domain::Locale;

/// Normalize a backend attribute type name.
///
/// Localized variants collapse onto their plain counterparts; unrecognized
/// names pass through unchanged.
fn normalize_type_name(name: &str) -> &str {
    match name {
        "lenum" => "enum",
        "ltext" => "text",
        other => other,
    }
}

/// Derive flat filter field descriptors from product type attribute
/// definitions.
///
/// One level of "set" wrapping is unwrapped to expose the element type.
/// Attributes the backend marks as not searchable are skipped; duplicate
/// attribute names across product types are reported once.
pub fn map_filter_fields(
    product_types: &[wire::ProductTypeDefinition],
    locale: &Locale,
) -> Vec<FilterField> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for product_type in product_types {
        for definition in &product_type.attributes {
            if definition.is_searchable == Some(false) {
                continue;
            }
            if !seen.insert(definition.name.clone()) {
                continue;
            }

            let attribute_type = match &definition.attribute_type.element_type {
                Some(element_type) if definition.attribute_type.name == "set" => element_type,
                _ => &definition.attribute_type,
            };

            fields.push(FilterField {
                field: definition.name.clone(),
                field_type: normalize_type_name(&attribute_type.name).to_string(),
                label: definition.label.get(&locale.language).cloned(),
                values: attribute_type.values.as_ref().map(|values| {
                    values
                        .iter()
                        .map(|value| FilterFieldValue {
                            value: value.key.clone(),
                            name: extract_attribute_value(&value.label, locale)
                                .as_str()
                                .map(String::from),
                        })
                        .collect()
                }),
            });
        }
    }

    fields
}
