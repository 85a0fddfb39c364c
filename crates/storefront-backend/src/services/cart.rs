//! Cart and checkout operations.

use crate::client::{BackendClient, CartQueryArgs, CART_EXPANSIONS, ZONE_EXPANSION};
use crate::error::BackendError;
use crate::mappers::{
    address_draft, map_cart, map_order, map_payment_resource, map_shipping_method, money_draft,
};
use crate::requests::{
    CartDraft, CartUpdate, CartUpdateAction, OrderFromCartDraft, PaymentDraft, PaymentUpdateAction,
};
use crate::services::op_context;
use crate::wire::{self, ResourceIdentifier};
use std::sync::Arc;
use storefront_domain::account::{Account, Address};
use storefront_domain::cart::{Cart, Payment};
use storefront_domain::order::Order;
use storefront_domain::shipping::ShippingMethod;
use storefront_domain::Locale;
use tracing::{debug, info};

/// Cart operations against the commerce backend, scoped to one request's
/// locale.
///
/// Every mutation threads the cart's version token through unchanged; a
/// stale token surfaces as a backend error, never reconciled here.
pub struct CartService {
    client: Arc<dyn BackendClient>,
    locale: Locale,
}

impl CartService {
    /// Create a service for one request.
    pub fn new(client: Arc<dyn BackendClient>, locale: Locale) -> Self {
        Self { client, locale }
    }

    /// Fetch the customer's active cart, creating one when none exists.
    pub async fn get_for_user(&self, account: &Account) -> Result<Cart, BackendError> {
        op_context("get_for_user", async {
            let args = CartQueryArgs {
                limit: 1,
                customer_id: Some(account.account_id.clone()),
                where_clauses: vec![],
            };
            let response = self.client.query_carts(&args, CART_EXPANSIONS).await?;

            if let Some(cart) = response.results.into_iter().next() {
                return self.build_cart(cart).await;
            }

            info!(customer = %account.account_id, "no active cart, creating one");
            let draft = CartDraft {
                currency: self.locale.currency.clone(),
                country: Some(self.locale.country.clone()),
                locale: Some(self.locale.language.clone()),
                customer_id: Some(account.account_id.clone()),
                anonymous_id: None,
            };
            let cart = self.client.create_cart(&draft, CART_EXPANSIONS).await?;
            self.build_cart(cart).await
        })
        .await
    }

    /// Fetch the anonymous cart for a session, creating one when none
    /// exists.
    pub async fn get_anonymous(&self, anonymous_id: &str) -> Result<Cart, BackendError> {
        op_context("get_anonymous", async {
            let args = CartQueryArgs {
                limit: 1,
                customer_id: None,
                where_clauses: vec![format!(r#"anonymousId="{anonymous_id}""#)],
            };
            let response = self.client.query_carts(&args, CART_EXPANSIONS).await?;

            if let Some(cart) = response.results.into_iter().next() {
                return self.build_cart(cart).await;
            }

            let draft = CartDraft {
                currency: self.locale.currency.clone(),
                country: Some(self.locale.country.clone()),
                locale: Some(self.locale.language.clone()),
                customer_id: None,
                anonymous_id: Some(anonymous_id.to_string()),
            };
            let cart = self.client.create_cart(&draft, CART_EXPANSIONS).await?;
            self.build_cart(cart).await
        })
        .await
    }

    /// Fetch a cart by its identifier.
    pub async fn get_by_id(&self, cart_id: &str) -> Result<Cart, BackendError> {
        op_context("get_by_id", async {
            let cart = self.client.get_cart(cart_id, CART_EXPANSIONS).await?;
            self.build_cart(cart).await
        })
        .await
    }

    /// Add a variant to the cart by SKU.
    pub async fn add_to_cart(&self, cart: &Cart, sku: &str, count: i64) -> Result<Cart, BackendError> {
        op_context("add_to_cart", async {
            debug!(sku, count, "adding line item");
            self.update(
                cart,
                vec![CartUpdateAction::AddLineItem {
                    sku: sku.to_string(),
                    quantity: count,
                }],
            )
            .await
        })
        .await
    }

    /// Change a line item's quantity.
    pub async fn update_line_item(
        &self,
        cart: &Cart,
        line_item_id: &str,
        count: i64,
    ) -> Result<Cart, BackendError> {
        op_context("update_line_item", async {
            self.update(
                cart,
                vec![CartUpdateAction::ChangeLineItemQuantity {
                    line_item_id: line_item_id.to_string(),
                    quantity: count,
                }],
            )
            .await
        })
        .await
    }

    /// Remove a line item.
    pub async fn remove_line_item(
        &self,
        cart: &Cart,
        line_item_id: &str,
    ) -> Result<Cart, BackendError> {
        op_context("remove_line_item", async {
            self.update(
                cart,
                vec![CartUpdateAction::RemoveLineItem {
                    line_item_id: line_item_id.to_string(),
                }],
            )
            .await
        })
        .await
    }

    /// Set the customer email on the cart.
    pub async fn set_email(&self, cart: &Cart, email: &str) -> Result<Cart, BackendError> {
        op_context("set_email", async {
            self.update(
                cart,
                vec![CartUpdateAction::SetCustomerEmail {
                    email: email.to_string(),
                }],
            )
            .await
        })
        .await
    }

    /// Set the shipping address.
    pub async fn set_shipping_address(
        &self,
        cart: &Cart,
        address: &Address,
    ) -> Result<Cart, BackendError> {
        op_context("set_shipping_address", async {
            self.update(
                cart,
                vec![CartUpdateAction::SetShippingAddress {
                    address: address_draft(address),
                }],
            )
            .await
        })
        .await
    }

    /// Set the billing address.
    pub async fn set_billing_address(
        &self,
        cart: &Cart,
        address: &Address,
    ) -> Result<Cart, BackendError> {
        op_context("set_billing_address", async {
            self.update(
                cart,
                vec![CartUpdateAction::SetBillingAddress {
                    address: address_draft(address),
                }],
            )
            .await
        })
        .await
    }

    /// Select a shipping method for the cart.
    pub async fn set_shipping_method(
        &self,
        cart: &Cart,
        shipping_method_id: &str,
    ) -> Result<Cart, BackendError> {
        op_context("set_shipping_method", async {
            self.update(
                cart,
                vec![CartUpdateAction::SetShippingMethod {
                    shipping_method: ResourceIdentifier::new("shipping-method", shipping_method_id),
                }],
            )
            .await
        })
        .await
    }

    /// Turn the cart into an order.
    pub async fn checkout(&self, cart: &Cart) -> Result<Order, BackendError> {
        op_context("checkout", async {
            let draft = OrderFromCartDraft {
                id: cart.cart_id.clone(),
                version: parse_version(&cart.cart_version)?,
                order_number: Some(generate_order_number()),
            };

            let order = self.client.create_order(&draft, CART_EXPANSIONS).await?;
            Ok(map_order(&order, &self.locale))
        })
        .await
    }

    /// Fetch shipping methods, optionally only those matching the locale's
    /// country.
    pub async fn get_shipping_methods(
        &self,
        only_matching: bool,
    ) -> Result<Vec<ShippingMethod>, BackendError> {
        op_context("get_shipping_methods", async {
            let country = only_matching.then(|| self.locale.country.clone());
            let response = self
                .client
                .shipping_methods(country.as_deref(), &[ZONE_EXPANSION])
                .await?;

            Ok(response
                .results
                .iter()
                .map(|method| map_shipping_method(method, &self.locale))
                .collect())
        })
        .await
    }

    /// Fetch the shipping methods matching a cart's shipping address.
    pub async fn get_available_shipping_methods(
        &self,
        cart: &Cart,
    ) -> Result<Vec<ShippingMethod>, BackendError> {
        op_context("get_available_shipping_methods", async {
            let response = self
                .client
                .shipping_methods_matching_cart(&cart.cart_id, &[ZONE_EXPANSION])
                .await?;

            Ok(response
                .results
                .iter()
                .map(|method| map_shipping_method(method, &self.locale))
                .collect())
        })
        .await
    }

    /// Create a payment resource and attach it to the cart.
    pub async fn add_payment(&self, cart: &Cart, payment: &Payment) -> Result<Cart, BackendError> {
        op_context("add_payment", async {
            let draft = PaymentDraft {
                key: payment.id.clone(),
                amount_planned: payment
                    .amount_planned
                    .as_ref()
                    .map(money_draft)
                    .unwrap_or_default(),
                interface_id: payment.payment_id.clone(),
                payment_method_info: wire::PaymentMethodInfo {
                    payment_interface: payment.payment_provider.clone(),
                    method: payment.payment_method.clone(),
                },
                payment_status: wire::PaymentStatus {
                    interface_code: payment.payment_status.clone(),
                    interface_text: payment.debug.clone(),
                },
            };

            let created = self.client.create_payment(&draft).await?;
            let payment_id = created.id.unwrap_or_default();

            self.update(
                cart,
                vec![CartUpdateAction::AddPayment {
                    payment: ResourceIdentifier::new("payment", payment_id),
                }],
            )
            .await
        })
        .await
    }

    /// Update a payment already attached to the cart.
    ///
    /// With nothing to change the payment is returned untouched; a payment
    /// the cart does not carry is an error.
    pub async fn update_payment(
        &self,
        cart: &Cart,
        payment: &Payment,
    ) -> Result<Payment, BackendError> {
        op_context("update_payment", async {
            let original = cart
                .payments
                .iter()
                .find(|candidate| candidate.id == payment.id)
                .ok_or_else(|| BackendError::PaymentNotInCart {
                    payment_id: payment.id.clone().unwrap_or_default(),
                    cart_id: cart.cart_id.clone(),
                })?;

            let mut actions = Vec::new();
            if let Some(status) = &payment.payment_status {
                actions.push(PaymentUpdateAction::SetStatusInterfaceCode {
                    interface_code: status.clone(),
                });
            }
            if let Some(debug_text) = &payment.debug {
                actions.push(PaymentUpdateAction::SetStatusInterfaceText {
                    interface_text: debug_text.clone(),
                });
            }
            if let Some(interface_id) = &payment.payment_id {
                actions.push(PaymentUpdateAction::SetInterfaceId {
                    interface_id: interface_id.clone(),
                });
            }

            if actions.is_empty() {
                return Ok(payment.clone());
            }

            let key = original.id.clone().unwrap_or_default();
            let response = self
                .client
                .update_payment(&key, original.version, &actions)
                .await?;

            Ok(map_payment_resource(&response))
        })
        .await
    }

    /// Apply update actions and re-map the resulting cart.
    async fn update(
        &self,
        cart: &Cart,
        actions: Vec<CartUpdateAction>,
    ) -> Result<Cart, BackendError> {
        let update = CartUpdate {
            version: parse_version(&cart.cart_version)?,
            actions,
        };
        let response = self
            .client
            .update_cart(&cart.cart_id, &update, CART_EXPANSIONS)
            .await?;
        self.build_cart(response).await
    }

    /// Map a wire cart, enriching it with the shipping methods available
    /// for its address.
    ///
    /// Matching shipping methods cannot be looked up until a shipping
    /// address with a country is set, so the enrichment is skipped before
    /// that point.
    async fn build_cart(&self, cart: wire::Cart) -> Result<Cart, BackendError> {
        op_context("build_cart_with_available_shipping_methods", async {
            let mut mapped = map_cart(&cart, &self.locale);

            let has_country = mapped
                .shipping_address
                .as_ref()
                .is_some_and(|address| address.country.is_some());
            if has_country {
                mapped.available_shipping_methods =
                    Some(self.get_available_shipping_methods(&mapped).await?);
            }

            Ok(mapped)
        })
        .await
    }
}

fn parse_version(version: &str) -> Result<i64, BackendError> {
    version
        .parse()
        .map_err(|_| BackendError::InvalidVersion(version.to_string()))
}

/// Generate a unique order number from timestamp and counter.
fn generate_order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:X}-{:04X}", timestamp, counter & 0xFFFF)
}
