//! Order records.

use crate::account::Address;
use crate::cart::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A placed order.
///
/// Structurally a cart with order identity fields. Immutable once produced
/// here; order state transitions happen in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Identifier of the cart the order was created from.
    pub cart_id: String,
    /// Backend order state, e.g. "Open".
    pub order_state: Option<String>,
    /// Human-facing order number.
    pub order_id: Option<String>,
    /// Opaque optimistic-concurrency token of the order resource.
    pub order_version: String,
    /// Items in the order.
    pub line_items: Vec<LineItem>,
    /// Customer email.
    pub email: Option<String>,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    /// Order total.
    pub sum: Option<Money>,
}
