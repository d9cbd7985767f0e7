//! HTTP client and storefront API bindings for Bajar.
//!
//! Provides a small builder-style HTTP client for talking to the
//! storefront REST API from Spin WASM builds, typed bindings for the
//! checkout-related endpoints, and the [`AsyncResource`] request-lifecycle
//! state shape the UI layers track network calls with.
//!
//! # Example
//!
//! ```rust,ignore
//! use bajar_data::StorefrontApi;
//!
//! let api = StorefrontApi::new("https://shop.example.com")
//!     .with_token("bearer-token");
//!
//! let config = api.fetch_charge_config()?;
//! let coupon = api.apply_coupon("SAVE10", &subtotal, &product_ids)?;
//! ```

mod error;
mod flow;
mod request;
mod resource;
mod response;
mod storefront;

pub use error::ApiError;
pub use flow::{CheckoutController, FlowError};
pub use request::{Method, RequestBuilder};
pub use resource::AsyncResource;
pub use response::Response;
pub use storefront::{PaymentRedirect, StorefrontApi};

use std::collections::HashMap;

/// HTTP client for making outbound requests.
///
/// A lightweight wrapper around Spin's HTTP client with a builder API;
/// off-WASM builds get a stub response so the crate stays testable.
pub struct ApiClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with the given method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, ApiError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = if let Some(body) = self.builder.body {
            request.body(body).map_err(|e| ApiError::Request(e.to_string()))?
        } else {
            request.build()
        };

        let response =
            spin_sdk::http::send(request).map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, ApiError> {
        // Empty response for non-WASM builds (testing/development)
        Ok(Response::new(200, HashMap::new(), Vec::new()))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiClient, ApiError, AsyncResource, CheckoutController, FlowError, Method, Response,
        StorefrontApi,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joining() {
        let client = ApiClient::new().with_base_url("https://shop.example.com/");
        let builder = client.get("/api/v1/charges");
        assert_eq!(
            builder.builder.url,
            "https://shop.example.com/api/v1/charges"
        );
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = ApiClient::new().with_base_url("https://shop.example.com");
        let builder = client.get("https://other.example.com/x");
        assert_eq!(builder.builder.url, "https://other.example.com/x");
    }

    #[test]
    fn test_default_headers_applied() {
        let client = ApiClient::new().with_default_header("Accept", "application/json");
        let builder = client.post("/api/v1/coupon/clear");
        assert_eq!(
            builder.builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
