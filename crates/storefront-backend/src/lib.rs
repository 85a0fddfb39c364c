//! Commerce backend integration for the storefront extensions.
//!
//! The headless commerce backend is a black-box collaborator. This crate
//! owns everything that touches its shape:
//!
//! - **Wire types**: serde models of the backend's verbose entity graphs
//! - **Client**: the [`BackendClient`] trait the host's transport implements
//! - **Mappers**: pure functions from wire entities into the simplified
//!   records of `storefront-domain`
//! - **Query assembler**: raw request parameters into a [`ProductQuery`]
//! - **Services**: per-request operation wrappers (`ProductService`,
//!   `CartService`) combining client calls with mapping
//!
//! [`ProductQuery`]: storefront_domain::query::ProductQuery

pub mod client;
pub mod error;
pub mod mappers;
pub mod query;
pub mod requests;
pub mod services;
#[doc(hidden)]
pub mod test_util;
pub mod wire;

pub use client::BackendClient;
pub use error::BackendError;
pub use services::{CartService, ProductService};
