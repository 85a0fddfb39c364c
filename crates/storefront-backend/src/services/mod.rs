//! Per-request operation wrappers around the backend client.
//!
//! A service is constructed fresh for each request with the client and the
//! request's locale; it holds no other state. Every public operation wraps
//! failures with its own name before propagating, so the host can always
//! tell which operation failed.

mod cart;
mod product;

pub use cart::CartService;
pub use product::ProductService;

use crate::error::BackendError;
use std::future::Future;

/// Run an operation body, wrapping any error with the operation's name.
pub(crate) async fn op_context<T>(
    operation: &'static str,
    body: impl Future<Output = Result<T, BackendError>>,
) -> Result<T, BackendError> {
    body.await
        .map_err(|source| BackendError::operation(operation, source))
}
