//! Cart, line item and payment records.

use crate::account::Address;
use crate::money::Money;
use crate::product::Variant;
use crate::shipping::ShippingMethod;
use serde::{Deserialize, Serialize};

/// A shopping cart as exposed to the storefront.
///
/// `cart_version` is the backend's optimistic-concurrency token. It is
/// threaded through every mutation unchanged; the backend rejects stale
/// versions and this layer never reconciles the conflict itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Backend cart identifier.
    pub cart_id: String,
    /// Opaque optimistic-concurrency token.
    pub cart_version: String,
    /// Items in the cart.
    pub line_items: Vec<LineItem>,
    /// Customer email, once set.
    pub email: Option<String>,
    /// Cart total.
    pub sum: Option<Money>,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    /// Selected shipping method and its applied price.
    pub shipping_info: Option<ShippingInfo>,
    /// Payments attached to the cart.
    pub payments: Vec<Payment>,
    /// Shipping methods matching the cart, populated once a shipping
    /// address with a country is known.
    pub available_shipping_methods: Option<Vec<ShippingMethod>>,
}

/// A line item in a cart or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Backend line item identifier.
    pub line_item_id: String,
    /// Locale-resolved product name, empty when the locale has no entry.
    pub name: String,
    /// Line item kind, always "variant" for backend-sourced items.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Quantity.
    pub count: i64,
    /// Unit price.
    pub price: Option<Money>,
    /// Discounted unit price, when a discount applies.
    pub discounted_price: Option<Money>,
    /// Total for the line.
    pub total_price: Option<Money>,
    /// The purchased variant.
    pub variant: Variant,
    /// Whether the backend added this line as a gift.
    pub is_gift: bool,
    /// Derived storefront URL for the line's product.
    #[serde(rename = "_url")]
    pub url: Option<String>,
}

impl LineItem {
    /// Derive the storefront URL for this line item.
    ///
    /// Line items carry no product slug, so the URL keeps a literal "slug"
    /// segment and relies on the SKU for resolution.
    pub fn canonical_url(&self) -> String {
        format!("/slug/p/{}", self.variant.sku)
    }
}

/// The cart's selected shipping method plus the price applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    /// The shipping method. Only the identifier is present when the backend
    /// did not expand the method object.
    #[serde(flatten)]
    pub method: ShippingMethod,
    /// Price applied for shipping.
    pub price: Option<Money>,
}

/// A payment attached to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment key within this system.
    pub id: Option<String>,
    /// Identifier on the payment provider side.
    pub payment_id: Option<String>,
    /// Payment service provider name.
    pub payment_provider: Option<String>,
    /// Payment method, e.g. "creditcard".
    pub payment_method: Option<String>,
    /// Amount the payment is planned over.
    pub amount_planned: Option<Money>,
    /// Raw provider payload kept for debugging.
    pub debug: Option<String>,
    /// Provider status code.
    pub payment_status: Option<String>,
    /// Backend version token of the payment resource.
    pub version: i64,
}
