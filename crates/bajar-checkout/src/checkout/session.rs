//! Checkout session state.
//!
//! An explicit, injected state container for one checkout attempt: the
//! cart snapshot, shipping info, coupon state and payment selection live
//! here, and the price breakdown is re-derived from them on demand. The
//! pricing functions themselves stay pure; the session owns no network
//! handles and no global state.

use crate::cart::CartSnapshot;
use crate::checkout::{OrderSubmission, ShippingInfo};
use crate::delivery::{ChargeConfig, DeliveryTariff};
use crate::discount::CouponSnapshot;
use crate::error::CheckoutError;
use crate::ids::SessionId;
use crate::payment::{PaymentMethod, PaymentType};
use crate::pricing::{PriceBreakdown, PricingInput};
use serde::{Deserialize, Serialize};

/// State for one checkout attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    /// Session identifier.
    pub id: SessionId,
    /// The immutable cart snapshot taken when checkout began.
    pub cart: CartSnapshot,
    /// Shipping form state.
    pub shipping: ShippingInfo,
    /// Order-wide free-delivery threshold, once fetched.
    pub charge_config: Option<ChargeConfig>,
    /// Applied coupon, once the server has validated one.
    pub coupon: Option<CouponSnapshot>,
    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,
    /// Selected payment staging.
    pub payment_type: PaymentType,
    /// Terms-and-conditions checkbox state.
    pub terms_accepted: bool,
    /// Delivery rate card.
    pub tariff: DeliveryTariff,
}

impl CheckoutSession {
    /// Start a session over a cart snapshot.
    pub fn new(cart: CartSnapshot) -> Self {
        Self {
            id: SessionId::generate(),
            cart,
            shipping: ShippingInfo::default(),
            charge_config: None,
            coupon: None,
            payment_method: None,
            payment_type: PaymentType::Full,
            terms_accepted: false,
            tariff: DeliveryTariff::default(),
        }
    }

    /// Set the shipping form state.
    pub fn set_shipping(&mut self, shipping: ShippingInfo) {
        self.shipping = shipping;
    }

    /// Record the fetched free-delivery threshold.
    pub fn set_charge_config(&mut self, config: ChargeConfig) {
        self.charge_config = Some(config);
    }

    /// Record a server-validated coupon.
    ///
    /// Only called on success; a failed application leaves the session
    /// unchanged, so no partial discount can ever be applied.
    pub fn apply_coupon(&mut self, coupon: CouponSnapshot) {
        self.coupon = Some(coupon);
    }

    /// Clear any applied coupon.
    pub fn clear_coupon(&mut self) -> Option<CouponSnapshot> {
        self.coupon.take()
    }

    /// Whether a coupon is currently applied.
    pub fn is_coupon_applied(&self) -> bool {
        self.coupon.is_some()
    }

    /// Select the payment method.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Select the payment staging.
    pub fn select_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    /// Set the terms-accepted flag.
    pub fn accept_terms(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Re-derive the price breakdown from the current session state.
    ///
    /// Cheap and side-effect-free; called on every relevant state change.
    pub fn breakdown(&self) -> Result<PriceBreakdown, CheckoutError> {
        PricingInput {
            cart: &self.cart,
            district: &self.shipping.district,
            charge_config: self.charge_config.as_ref(),
            coupon: self.coupon.as_ref(),
            payment_type: self.payment_type,
            tariff: &self.tariff,
        }
        .quote()
    }

    /// Assemble the order submission for the current state.
    pub fn assemble_order(&self) -> Result<OrderSubmission, CheckoutError> {
        let breakdown = self.breakdown()?;
        OrderSubmission::assemble(
            &self.cart,
            &self.shipping,
            &breakdown,
            self.payment_method,
            self.payment_type,
            self.coupon.as_ref(),
            self.terms_accepted,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;
    use crate::discount::DiscountType;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};

    fn taka(amount: i64) -> Money {
        Money::from_major(amount, Currency::BDT)
    }

    fn session() -> CheckoutSession {
        let item = CartItem::new(ProductId::generate(), "Saree", taka(500), 1)
            .unwrap()
            .with_weight(0.8);
        let mut session = CheckoutSession::new(CartSnapshot::new(vec![item], Currency::BDT));
        session.set_shipping(ShippingInfo {
            name: "Fatema".to_string(),
            phone: "01900000000".to_string(),
            email: "fatema@example.com".to_string(),
            address: "Sector 4".to_string(),
            district: "Dhaka".to_string(),
            thana: "Uttara".to_string(),
            zip_code: "1230".to_string(),
            country: "Bangladesh".to_string(),
        });
        session
    }

    fn coupon() -> CouponSnapshot {
        CouponSnapshot {
            code: "SAVE10".to_string(),
            discount_type: DiscountType::Fixed,
            discount_value: 50.0,
            discount_amount: taka(50),
        }
    }

    #[test]
    fn test_breakdown_tracks_coupon_state() {
        let mut session = session();
        assert_eq!(session.breakdown().unwrap().final_product_total, taka(500));

        session.apply_coupon(coupon());
        assert!(session.is_coupon_applied());
        assert_eq!(session.breakdown().unwrap().final_product_total, taka(450));

        let removed = session.clear_coupon();
        assert_eq!(removed.unwrap().code, "SAVE10");
        assert_eq!(session.breakdown().unwrap().final_product_total, taka(500));
    }

    #[test]
    fn test_breakdown_tracks_payment_type() {
        let mut session = session();
        session.select_payment_type(PaymentType::CashOnDelivery);
        let breakdown = session.breakdown().unwrap();
        assert_eq!(breakdown.payable_now, taka(100));
        assert_eq!(breakdown.remaining, taka(500));
    }

    #[test]
    fn test_assemble_requires_method_and_terms() {
        let mut session = session();
        assert_eq!(
            session.assemble_order(),
            Err(CheckoutError::NoPaymentMethod)
        );

        session.select_payment_method(PaymentMethod::Eps);
        assert_eq!(
            session.assemble_order(),
            Err(CheckoutError::TermsNotAccepted)
        );

        session.accept_terms(true);
        let order = session.assemble_order().unwrap();
        assert_eq!(order.grand_total, taka(600));
    }

    #[test]
    fn test_district_change_recomputes_charge() {
        let mut session = session();
        assert_eq!(session.breakdown().unwrap().base_delivery_charge, taka(100));

        session.shipping.district = "Chattogram".to_string();
        assert_eq!(session.breakdown().unwrap().base_delivery_charge, taka(130));
    }
}
