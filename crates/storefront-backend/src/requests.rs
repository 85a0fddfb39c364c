//! Request bodies sent to the commerce backend.

use crate::wire::{Address, Money, ResourceIdentifier};
use serde::{Deserialize, Serialize};

/// Draft for creating a fresh cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_id: Option<String>,
}

/// A versioned batch of cart update actions.
///
/// The version is the cart's optimistic-concurrency token, passed through
/// from the domain record unchanged; the backend rejects stale values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub version: i64,
    pub actions: Vec<CartUpdateAction>,
}

/// Update actions understood by the backend's cart endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartUpdateAction {
    AddLineItem { sku: String, quantity: i64 },
    ChangeLineItemQuantity { line_item_id: String, quantity: i64 },
    RemoveLineItem { line_item_id: String },
    SetCustomerEmail { email: String },
    SetShippingAddress { address: Address },
    SetBillingAddress { address: Address },
    SetShippingMethod { shipping_method: ResourceIdentifier },
    AddPayment { payment: ResourceIdentifier },
}

/// Draft for turning a cart into an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFromCartDraft {
    pub id: String,
    pub version: i64,
    pub order_number: Option<String>,
}

/// Draft for creating a payment resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub amount_planned: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_id: Option<String>,
    pub payment_method_info: crate::wire::PaymentMethodInfo,
    pub payment_status: crate::wire::PaymentStatus,
}

/// A versioned batch of payment update actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    pub version: i64,
    pub actions: Vec<PaymentUpdateAction>,
}

/// Update actions understood by the backend's payment endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PaymentUpdateAction {
    SetStatusInterfaceCode { interface_code: String },
    SetStatusInterfaceText { interface_text: String },
    SetInterfaceId { interface_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_action_serializes_with_action_tag() {
        let action = CartUpdateAction::AddLineItem {
            sku: "SKU1".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "addLineItem");
        assert_eq!(json["sku"], "SKU1");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_change_quantity_uses_camel_case_fields() {
        let action = CartUpdateAction::ChangeLineItemQuantity {
            line_item_id: "li-1".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "changeLineItemQuantity");
        assert_eq!(json["lineItemId"], "li-1");
    }
}
