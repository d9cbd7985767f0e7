//! Checkout flow controller.
//!
//! Binds the pure [`CheckoutSession`] state to the storefront API and
//! tracks each network call with an [`AsyncResource`]. Failures are
//! recovered locally: they surface as a message, leave the session
//! unchanged (no partial discount, no optimistic order state) and clear
//! on the next user action.

use crate::{ApiError, AsyncResource, PaymentRedirect, StorefrontApi};
use bajar_checkout::checkout::CheckoutSession;
use bajar_checkout::delivery::ChargeConfig;
use bajar_checkout::discount::CouponSnapshot;
use bajar_checkout::CheckoutError;
use thiserror::Error;

/// Errors surfaced by the checkout flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Local pre-submission validation failed; nothing was sent.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A network call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives one checkout attempt against the storefront API.
pub struct CheckoutController {
    /// The checkout state being priced.
    pub session: CheckoutSession,
    /// Lifecycle of the charge-config fetch.
    pub charge_config: AsyncResource<ChargeConfig>,
    /// Lifecycle of the coupon application.
    pub coupon: AsyncResource<CouponSnapshot>,
    /// Lifecycle of the payment initialization.
    pub payment: AsyncResource<PaymentRedirect>,
}

impl CheckoutController {
    /// Create a controller over a session.
    pub fn new(session: CheckoutSession) -> Self {
        Self {
            session,
            charge_config: AsyncResource::default(),
            coupon: AsyncResource::default(),
            payment: AsyncResource::default(),
        }
    }

    /// Fetch the order-wide free-delivery threshold into the session.
    pub fn load_charge_config(&mut self, api: &StorefrontApi) {
        self.charge_config.start();
        match api.fetch_charge_config() {
            Ok(config) => {
                self.session.set_charge_config(config);
                self.charge_config.succeed(config);
            }
            Err(e) => self.charge_config.fail(e.to_string()),
        }
    }

    /// Apply a coupon code.
    ///
    /// Ignored while a previous application is still in flight (the UI
    /// disables the Apply button on `is_loading`). On rejection the
    /// coupon state is forced off and the session keeps pricing without
    /// any discount.
    pub fn apply_coupon(&mut self, api: &StorefrontApi, code: &str) -> Result<(), FlowError> {
        if self.coupon.is_loading() {
            return Ok(());
        }
        self.coupon.start();

        let subtotal = match self.session.cart.items_price() {
            Ok(subtotal) => subtotal,
            Err(e) => {
                self.coupon.fail(e.to_string());
                return Err(e.into());
            }
        };
        match api.apply_coupon(code, &subtotal, &self.session.cart.product_ids()) {
            Ok(snapshot) => {
                self.session.apply_coupon(snapshot.clone());
                self.coupon.succeed(snapshot);
                Ok(())
            }
            Err(e) => {
                self.session.clear_coupon();
                self.coupon.fail(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Remove the applied coupon and clear the server-side coupon state.
    pub fn remove_coupon(&mut self, api: &StorefrontApi) -> Result<(), FlowError> {
        self.session.clear_coupon();
        self.coupon.reset();
        api.clear_coupon()?;
        Ok(())
    }

    /// Validate, assemble and submit the order.
    ///
    /// Validation failures block submission before any network call. A
    /// failed initialization leaves the order un-placed; the caller
    /// redirects to the returned gateway URL on success.
    pub fn submit(&mut self, api: &StorefrontApi) -> Result<PaymentRedirect, FlowError> {
        let order = self.session.assemble_order()?;

        self.payment.start();
        match api.initialize_payment(&order) {
            Ok(redirect) => {
                self.payment.succeed(redirect.clone());
                Ok(redirect)
            }
            Err(e) => {
                self.payment.fail(e.to_string());
                Err(e.into())
            }
        }
    }
}
