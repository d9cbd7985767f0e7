//! Async request lifecycle state.
//!
//! One generic state shape for every network-backed resource (charge
//! config, coupon application, payment initialization) instead of
//! per-resource request/success/fail flag triples.

use serde::{Deserialize, Serialize};

/// Lifecycle of one async resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase", tag = "status", content = "value")]
pub enum AsyncResource<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight. UI disables the triggering control while here.
    Loading,
    /// Request succeeded.
    Success(T),
    /// Request failed with a user-facing message.
    Failed(String),
}

impl<T> AsyncResource<T> {
    /// Move to the loading state.
    pub fn start(&mut self) {
        *self = AsyncResource::Loading;
    }

    /// Record a successful result.
    pub fn succeed(&mut self, value: T) {
        *self = AsyncResource::Success(value);
    }

    /// Record a failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = AsyncResource::Failed(message.into());
    }

    /// Reset to idle (e.g., when the user clears the error).
    pub fn reset(&mut self) {
        *self = AsyncResource::Idle;
    }

    /// Check if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncResource::Loading)
    }

    /// Get the success value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            AsyncResource::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Get the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncResource::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply a `Result` to this resource.
    pub fn settle<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(value) => self.succeed(value),
            Err(e) => self.fail(e.to_string()),
        }
    }
}
