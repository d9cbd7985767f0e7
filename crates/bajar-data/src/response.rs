//! HTTP response handling.

use crate::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// The error body the storefront API returns on rejection.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, ApiError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| ApiError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Convert to a Result, turning non-2xx statuses into errors.
    ///
    /// A `{ "message": ... }` body becomes `ApiError::Rejected` so the
    /// server's user-facing message survives; anything else becomes a
    /// plain HTTP error.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        if let Ok(body) = self.json::<ErrorBody>() {
            return Err(ApiError::Rejected(body.message));
        }
        let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Http {
            status: self.status,
            message,
        })
    }
}
