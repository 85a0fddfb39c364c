//! Backend error types.

use thiserror::Error;

/// Errors surfaced by the commerce backend collaborator.
///
/// Service operations wrap whatever they hit with their own name via
/// [`BackendError::operation`] before propagating, so the host always sees
/// which operation failed. Mapping never produces errors; missing optional
/// data maps to partially populated records instead.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend's response did not match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A version token that should be a number was not one.
    #[error("Invalid version token: {0}")]
    InvalidVersion(String),

    /// A payment referenced by a mutation is not attached to the cart.
    #[error("Payment {payment_id} not found in cart {cart_id}")]
    PaymentNotInCart { payment_id: String, cart_id: String },

    /// A failure wrapped with the name of the operation that hit it.
    #[error("{operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<BackendError>,
    },
}

impl BackendError {
    /// Wrap an error with the name of the failing operation.
    pub fn operation(operation: &'static str, source: BackendError) -> Self {
        BackendError::Operation {
            operation,
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Deserialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_context_names_the_operation() {
        let inner = BackendError::Http {
            status: 502,
            message: "bad gateway".to_string(),
        };
        let wrapped = BackendError::operation("get_for_user", inner);
        assert_eq!(
            wrapped.to_string(),
            "get_for_user failed: HTTP 502: bad gateway"
        );
    }
}
