//! The backend client collaborator trait.

use crate::error::BackendError;
use crate::requests::{
    CartDraft, CartUpdate, OrderFromCartDraft, PaymentDraft, PaymentUpdateAction,
};
use crate::wire;
use async_trait::async_trait;

/// Expand paths requested on every cart read and mutation, so discounts and
/// payments come back inlined.
pub const CART_EXPANSIONS: &[&str] = &[
    "lineItems[*].discountedPrice.includedDiscounts[*].discount",
    "discountCodes[*].discountCode",
    "paymentInfo.payments[*]",
];

/// Expand path for shipping method zones.
pub const ZONE_EXPANSION: &str = "zoneRates[*].zone";

/// Arguments of a product projection search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductSearchArgs {
    pub limit: i64,
    pub offset: i64,
    /// Backend filter predicates, e.g. `variants.sku:"SKU1"`.
    pub filter_query: Vec<String>,
    /// Language tag the full-text term applies to.
    pub text_language: Option<String>,
    /// Full-text search term.
    pub text: Option<String>,
    /// Currency used for price scoping.
    pub price_currency: Option<String>,
    /// Country used for price scoping.
    pub price_country: Option<String>,
}

/// Arguments of a category query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryQueryArgs {
    pub limit: i64,
    /// Backend `where` predicates, e.g. `slug(en="shoes")`.
    pub where_clauses: Vec<String>,
}

/// Arguments of a cart lookup query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartQueryArgs {
    pub limit: i64,
    /// Restrict to carts owned by this customer.
    pub customer_id: Option<String>,
    /// Backend `where` predicates, e.g. `anonymousId="..."`.
    pub where_clauses: Vec<String>,
}

/// The commerce backend as this layer consumes it.
///
/// Implementations own transport, authentication and endpoint mechanics.
/// This layer adds no retries, no caching and no timeouts; a failing call
/// surfaces as a [`BackendError`] and the host decides what to do with it.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Search product projections.
    async fn search_products(
        &self,
        args: &ProductSearchArgs,
    ) -> Result<wire::PagedResponse<wire::ProductProjection>, BackendError>;

    /// Query categories.
    async fn query_categories(
        &self,
        args: &CategoryQueryArgs,
    ) -> Result<wire::PagedResponse<wire::Category>, BackendError>;

    /// Fetch all product types with their attribute definitions.
    async fn query_product_types(
        &self,
    ) -> Result<wire::PagedResponse<wire::ProductTypeDefinition>, BackendError>;

    /// Query carts.
    async fn query_carts(
        &self,
        args: &CartQueryArgs,
        expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::Cart>, BackendError>;

    /// Fetch a cart by id.
    async fn get_cart(&self, cart_id: &str, expand: &[&str])
        -> Result<wire::Cart, BackendError>;

    /// Create a cart from a draft.
    async fn create_cart(
        &self,
        draft: &CartDraft,
        expand: &[&str],
    ) -> Result<wire::Cart, BackendError>;

    /// Apply update actions to a cart.
    async fn update_cart(
        &self,
        cart_id: &str,
        update: &CartUpdate,
        expand: &[&str],
    ) -> Result<wire::Cart, BackendError>;

    /// Create an order from a cart.
    async fn create_order(
        &self,
        draft: &OrderFromCartDraft,
        expand: &[&str],
    ) -> Result<wire::Order, BackendError>;

    /// Fetch shipping methods, optionally narrowed to a country.
    async fn shipping_methods(
        &self,
        country: Option<&str>,
        expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::ShippingMethod>, BackendError>;

    /// Fetch shipping methods matching a cart's shipping address.
    async fn shipping_methods_matching_cart(
        &self,
        cart_id: &str,
        expand: &[&str],
    ) -> Result<wire::PagedResponse<wire::ShippingMethod>, BackendError>;

    /// Create a payment resource.
    async fn create_payment(&self, draft: &PaymentDraft) -> Result<wire::Payment, BackendError>;

    /// Apply update actions to a payment resource.
    async fn update_payment(
        &self,
        key: &str,
        version: i64,
        actions: &[PaymentUpdateAction],
    ) -> Result<wire::Payment, BackendError>;
}
