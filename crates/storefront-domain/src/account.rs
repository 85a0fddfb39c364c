//! Account and address records.

use serde::{Deserialize, Serialize};

/// A customer account, as far as this layer needs to know it.
///
/// Account/session semantics live in the host; the extensions only use the
/// identifier to look up customer-owned carts and the email for checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Backend customer identifier.
    pub account_id: String,
    /// Account email.
    pub email: Option<String>,
}

/// A shipping or billing address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: Option<String>,
    pub salutation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_name: Option<String>,
    pub street_number: Option<String>,
    pub additional_street_info: Option<String>,
    pub additional_address_info: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    /// ISO country code. Needed before matching shipping methods can be
    /// looked up for a cart.
    pub country: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
}
