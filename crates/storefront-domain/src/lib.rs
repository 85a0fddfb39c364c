//! Storefront-facing domain types for the commerce extensions.
//!
//! This crate holds the simplified, stable shape that the extension layer
//! returns to the host runtime:
//!
//! - **Catalog**: products, variants, categories, filter fields
//! - **Cart**: carts, line items, payments, shipping info
//! - **Checkout**: orders, addresses, shipping methods and rates
//! - **Queries**: product/category query parameters and paged results
//!
//! Everything here is an immutable value record produced fresh per request.
//! There is no I/O and no shared state; mapping from the backend's verbose
//! representation into these types lives in `storefront-backend`.

pub mod account;
pub mod cart;
pub mod filter;
pub mod locale;
pub mod money;
pub mod order;
pub mod product;
pub mod query;
pub mod shipping;

pub use locale::Locale;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::locale::Locale;
    pub use crate::money::Money;

    pub use crate::account::{Account, Address};
    pub use crate::cart::{Cart, LineItem, Payment, ShippingInfo};
    pub use crate::filter::{FilterField, FilterFieldValue};
    pub use crate::order::Order;
    pub use crate::product::{Attributes, Category, Product, Variant};
    pub use crate::query::{CategoryQuery, PagedResult, ProductQuery};
    pub use crate::shipping::{ShippingLocation, ShippingMethod, ShippingRate};
}
