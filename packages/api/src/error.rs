//! Errors returned by [`crate::UsersClient`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Transport failure or a non-success HTTP status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not a JSON array of users.
    #[error("malformed user list: {0}")]
    Decode(#[from] serde_json::Error),
}
