//! Canned backend for tests.
//!
//! Kept out of `#[cfg(test)]` so the extension crate's tests can drive the
//! same stub; not part of the supported API surface.

use crate::client::{BackendClient, CartQueryArgs, CategoryQueryArgs, ProductSearchArgs};
use crate::error::BackendError;
use crate::requests::{
    CartDraft, CartUpdate, OrderFromCartDraft, PaymentDraft, PaymentUpdateAction,
};
use crate::wire;
use async_trait::async_trait;
use std::sync::Mutex;

/// Backend stub returning configured fixtures and recording the arguments
/// of the calls it receives.
#[derive(Default)]
pub struct MockBackend {
    pub products: Vec<wire::ProductProjection>,
    pub product_total: Option<i64>,
    pub categories: Vec<wire::Category>,
    pub product_types: Vec<wire::ProductTypeDefinition>,
    pub carts: Vec<wire::Cart>,
    pub updated_cart: Option<wire::Cart>,
    pub shipping_methods: Vec<wire::ShippingMethod>,

    pub last_search: Mutex<Option<ProductSearchArgs>>,
    pub last_cart_query: Mutex<Option<CartQueryArgs>>,
    pub last_cart_draft: Mutex<Option<CartDraft>>,
    pub last_cart_update: Mutex<Option<CartUpdate>>,
    pub last_order_draft: Mutex<Option<OrderFromCartDraft>>,
    pub last_shipping_country: Mutex<Option<Option<String>>>,
    pub last_payment_draft: Mutex<Option<PaymentDraft>>,
    pub last_payment_update: Mutex<Option<(String, i64, Vec<PaymentUpdateAction>)>>,
}

fn page<T: Clone>(results: &[T], total: Option<i64>) -> wire::PagedResponse<T> {
    wire::PagedResponse {
        limit: results.len() as i64,
        offset: 0,
        count: results.len() as i64,
        total: total.or(Some(results.len() as i64)),
        results: results.to_vec(),
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    async fn search_products(
        &self,
        args: &ProductSearchArgs,
    ) -> Result<wire::PagedResponse<wire::ProductProjection>, BackendError> {
        *self.last_search.lock().unwrap() = Some(args.clone());
        let mut response = page(&self.products, self.product_total);
        response.limit = args.limit;
        response.offset = args.offset;
        Ok(response)
    }

    async fn query_categories(
        &self,
        _args: &CategoryQueryArgs,
    ) -> Result<wire::PagedResponse<wire::Category>, BackendError> {
        Ok(page(&self.categories, None))
    }

    async fn query_product_types(
        &self,
    ) -> Result<wire::PagedResponse<wire::ProductTypeDefinition>, BackendError> {
        Ok(page(&self.product_types, None))
    }

    async fn query_carts(
        &self,
        args: &CartQueryArgs,
        _expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::Cart>, BackendError> {
        *self.last_cart_query.lock().unwrap() = Some(args.clone());
        Ok(page(&self.carts, None))
    }

    async fn get_cart(&self, cart_id: &str, _expand: &[&str]) -> Result<wire::Cart, BackendError> {
        self.carts
            .iter()
            .find(|cart| cart.id == cart_id)
            .cloned()
            .ok_or_else(|| BackendError::Http {
                status: 404,
                message: format!("cart {cart_id} not found"),
            })
    }

    async fn create_cart(
        &self,
        draft: &CartDraft,
        _expand: &[&str],
    ) -> Result<wire::Cart, BackendError> {
        *self.last_cart_draft.lock().unwrap() = Some(draft.clone());
        Ok(wire::Cart {
            id: "cart-new".to_string(),
            version: 1,
            customer_id: draft.customer_id.clone(),
            anonymous_id: draft.anonymous_id.clone(),
            total_price: wire::Money::new(0, &draft.currency),
            ..wire::Cart::default()
        })
    }

    async fn update_cart(
        &self,
        cart_id: &str,
        update: &CartUpdate,
        _expand: &[&str],
    ) -> Result<wire::Cart, BackendError> {
        *self.last_cart_update.lock().unwrap() = Some(update.clone());
        if let Some(updated) = &self.updated_cart {
            return Ok(updated.clone());
        }
        let mut cart = self.get_cart(cart_id, &[]).await?;
        cart.version = update.version + 1;
        Ok(cart)
    }

    async fn create_order(
        &self,
        draft: &OrderFromCartDraft,
        _expand: &[&str],
    ) -> Result<wire::Order, BackendError> {
        *self.last_order_draft.lock().unwrap() = Some(draft.clone());
        Ok(wire::Order {
            id: draft.id.clone(),
            version: 1,
            order_number: draft.order_number.clone(),
            order_state: Some("Open".to_string()),
            total_price: wire::Money::new(9900, "USD"),
            ..wire::Order::default()
        })
    }

    async fn shipping_methods(
        &self,
        country: Option<&str>,
        _expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::ShippingMethod>, BackendError> {
        *self.last_shipping_country.lock().unwrap() = Some(country.map(String::from));
        Ok(page(&self.shipping_methods, None))
    }

    async fn shipping_methods_matching_cart(
        &self,
        _cart_id: &str,
        _expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::ShippingMethod>, BackendError> {
        Ok(page(&self.shipping_methods, None))
    }

    async fn create_payment(&self, draft: &PaymentDraft) -> Result<wire::Payment, BackendError> {
        *self.last_payment_draft.lock().unwrap() = Some(draft.clone());
        Ok(wire::Payment {
            id: Some("payment-resource-1".to_string()),
            key: draft.key.clone(),
            interface_id: draft.interface_id.clone(),
            payment_method_info: draft.payment_method_info.clone(),
            amount_planned: draft.amount_planned.clone(),
            payment_status: draft.payment_status.clone(),
            version: 1,
        })
    }

    async fn update_payment(
        &self,
        key: &str,
        version: i64,
        actions: &[PaymentUpdateAction],
    ) -> Result<wire::Payment, BackendError> {
        *self.last_payment_update.lock().unwrap() =
            Some((key.to_string(), version, actions.to_vec()));
        Ok(wire::Payment {
            id: Some("payment-resource-1".to_string()),
            key: Some(key.to_string()),
            version: version + 1,
            ..wire::Payment::default()
        })
    }
}
