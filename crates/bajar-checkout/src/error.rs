//! Checkout error types.

use thiserror::Error;

/// Errors that can occur while pricing or assembling an order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    /// Cart is empty.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid quantity on a line item.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A required shipping field is missing.
    #[error("Missing shipping field: {0}")]
    MissingShippingField(&'static str),

    /// No payment method selected.
    #[error("No payment method selected")]
    NoPaymentMethod,

    /// Terms and conditions not accepted.
    #[error("Terms and conditions must be accepted")]
    TermsNotAccepted,

    /// Cash on delivery is not available for pre-orders.
    #[error("Cash on delivery is not available for pre-orders")]
    CodOnPreOrder,

    /// The delivery charge must be collected up front, never deferred.
    #[error("Delivery charge of {charge} cannot be deferred (payable now is {payable_now})")]
    DeliveryChargeDeferred { charge: String, payable_now: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,
}
