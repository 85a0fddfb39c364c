//! Extension error types.

use storefront_backend::BackendError;
use thiserror::Error;

/// Errors surfaced to the host runtime.
///
/// The host is the final error boundary; nothing here renders a user-facing
/// error page.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// A backend operation failed.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A payload could not be serialized for the host.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An action that requires a body was called without one.
    #[error("Missing request body")]
    MissingBody,

    /// The request body did not match the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The host asked for a data source this extension does not provide.
    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    /// The host asked for an action this extension does not provide.
    #[error("Unknown action: {0}/{1}")]
    UnknownAction(String, String),
}

impl From<serde_json::Error> for ExtensionError {
    fn from(e: serde_json::Error) -> Self {
        ExtensionError::Serialization(e.to_string())
    }
}
