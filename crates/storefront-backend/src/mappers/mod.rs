//! Pure mapping from backend wire entities into storefront domain records.
//!
//! Every function here is `(wire entity, locale) -> domain record` with no
//! I/O and no shared state; missing optional data maps to `None` rather
//! than failing. Safe to call repeatedly and concurrently.

mod cart;
mod filters;
mod product;

pub use cart::{
    address_draft, map_address, map_cart, map_line_items, map_order, map_payment,
    map_payment_resource, map_payments, map_shipping_info, map_shipping_method, map_zone_rates,
    money_draft,
};
pub use filters::map_filter_fields;
pub use product::{
    extract_attribute_value, extract_price_and_discounted_price, map_attributes, map_categories,
    map_category, map_money, map_product_projection, map_variant, map_variants,
};
