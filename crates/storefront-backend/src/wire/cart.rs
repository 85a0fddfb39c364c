//! Cart, order, shipping and payment wire types.

use super::{LocalizedString, Money, ProductVariant, Reference};
use serde::{Deserialize, Serialize};

/// A cart resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    pub version: i64,
    pub customer_id: Option<String>,
    pub anonymous_id: Option<String>,
    pub customer_email: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub total_price: Money,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    pub shipping_info: Option<ShippingInfo>,
    pub payment_info: Option<PaymentInfo>,
}

/// A cart line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedString,
    pub quantity: i64,
    pub price: Option<super::Price>,
    pub total_price: Option<Money>,
    #[serde(default)]
    pub variant: ProductVariant,
    /// "GiftLineItem" marks lines the backend added as gifts.
    pub line_item_mode: Option<String>,
}

/// A postal address on a cart or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_name: Option<String>,
    pub street_number: Option<String>,
    pub additional_street_info: Option<String>,
    pub additional_address_info: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
}

/// Shipping info attached to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub shipping_method: Reference<ShippingMethod>,
    pub price: Money,
}

/// A shipping method resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    pub id: String,
    pub name: Option<String>,
    pub localized_name: Option<LocalizedString>,
    pub description: Option<String>,
    pub localized_description: Option<LocalizedString>,
    pub zone_rates: Option<Vec<ZoneRate>>,
}

/// Rates of a shipping method for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRate {
    pub zone: Reference<Zone>,
    #[serde(default)]
    pub shipping_rates: Vec<ShippingRate>,
}

/// A shipping zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub name: Option<String>,
    pub locations: Option<Vec<ZoneLocation>>,
}

/// A location inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLocation {
    pub country: String,
    pub state: Option<String>,
}

/// One rate of a zone.
///
/// `is_matching` is only present when the query asked for location-matching
/// rates; absent means the rate applies unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    pub price: Money,
    pub is_matching: Option<bool>,
}

/// Payment references attached to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(default)]
    pub payments: Vec<Reference<Payment>>,
}

/// A payment resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Option<String>,
    pub key: Option<String>,
    pub interface_id: Option<String>,
    #[serde(default)]
    pub payment_method_info: PaymentMethodInfo,
    pub amount_planned: Money,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub version: i64,
}

/// Provider and method of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodInfo {
    pub payment_interface: Option<String>,
    pub method: Option<String>,
}

/// Provider-reported status of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub interface_code: Option<String>,
    pub interface_text: Option<String>,
}

/// An order resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub version: i64,
    pub order_number: Option<String>,
    pub order_state: Option<String>,
    pub customer_email: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub total_price: Money,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
}
