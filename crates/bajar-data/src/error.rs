//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response without a usable body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The server rejected the operation with a user-facing message
    /// (e.g., an invalid or expired coupon code).
    #[error("{0}")]
    Rejected(String),

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Payment initialization succeeded but returned no redirect URL.
    #[error("Failed to get payment link")]
    MissingPaymentLink,
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e.to_string())
    }
}
