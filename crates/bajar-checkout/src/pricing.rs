//! The checkout price breakdown.
//!
//! `PricingInput::quote` wires the pricing stages together in dependency
//! order: weight aggregation, delivery charge, free-delivery discounts,
//! coupon application, payment split. It is a pure function of its inputs
//! and is recomputed on every relevant state change; nothing is cached.

use crate::cart::{CartSnapshot, WeightBreakdown};
use crate::delivery::{ChargeConfig, DeliveryTariff};
use crate::discount::{CouponSnapshot, DeliveryDiscounts};
use crate::error::CheckoutError;
use crate::money::Money;
use crate::payment::{PaymentSplit, PaymentType};
use serde::{Deserialize, Serialize};

/// Complete price breakdown for one checkout attempt.
///
/// Advisory only: the server independently recomputes and verifies all of
/// this before accepting payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Product subtotal before any discount.
    pub items_price: Money,
    /// Cart weight totals.
    pub weights: WeightBreakdown,
    /// Delivery charge computed over the full order weight.
    pub base_delivery_charge: Money,
    /// Part of the delivery charge that is waived (order-wide case).
    pub delivery_discount: Money,
    /// Product price reduction from free-delivery items.
    pub product_discount: Money,
    /// Delivery charge the customer actually pays now. Always the full
    /// base charge; free delivery flows back through the product side.
    pub payable_delivery_charge: Money,
    /// Server-resolved coupon discount (zero when no coupon applied).
    pub coupon_discount: Money,
    /// Product total after all discounts, clamped at zero.
    pub final_product_total: Money,
    /// Product total plus payable delivery charge.
    pub grand_total: Money,
    /// Amount collected through the gateway now.
    pub payable_now: Money,
    /// Amount deferred to delivery time.
    pub remaining: Money,
}

/// Inputs to one pricing pass.
#[derive(Debug, Clone)]
pub struct PricingInput<'a> {
    /// The immutable cart snapshot.
    pub cart: &'a CartSnapshot,
    /// Destination district (drives the delivery tier).
    pub district: &'a str,
    /// Order-wide free-delivery threshold, when configured.
    pub charge_config: Option<&'a ChargeConfig>,
    /// Applied coupon, when any.
    pub coupon: Option<&'a CouponSnapshot>,
    /// Selected payment staging.
    pub payment_type: PaymentType,
    /// Delivery rate card.
    pub tariff: &'a DeliveryTariff,
}

impl PricingInput<'_> {
    /// Compute the full price breakdown.
    pub fn quote(&self) -> Result<PriceBreakdown, CheckoutError> {
        let currency = self.cart.currency;
        let items_price = self.cart.items_price()?;
        let weights = WeightBreakdown::from_cart(self.cart);

        let base_delivery_charge = self.tariff.charge(self.district, weights.total_kg);
        let discounts = DeliveryDiscounts::resolve(
            &items_price,
            &base_delivery_charge,
            self.charge_config,
            self.district,
            &weights,
            self.tariff,
        );

        // Explicit business rule: the delivery fee itself is charged in
        // full; the order-wide waiver offsets it on the product side.
        let payable_delivery_charge = base_delivery_charge;

        let mismatch = |got: Money| CheckoutError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: got.currency.code().to_string(),
        };

        let after_product_discount = items_price
            .sub_clamped(&discounts.product_discount)
            .ok_or_else(|| mismatch(discounts.product_discount))?
            .sub_clamped(&discounts.delivery_discount)
            .ok_or_else(|| mismatch(discounts.delivery_discount))?;

        let coupon_discount = self
            .coupon
            .map(|c| c.discount_amount)
            .unwrap_or_else(|| Money::zero(currency));

        let final_product_total = after_product_discount
            .sub_clamped(&coupon_discount)
            .ok_or_else(|| mismatch(coupon_discount))?;

        let grand_total = final_product_total
            .try_add(&payable_delivery_charge)
            .ok_or(CheckoutError::Overflow)?;

        let split: PaymentSplit = self
            .payment_type
            .split(&final_product_total, &payable_delivery_charge)?;
        split.ensure_delivery_charge_paid(&payable_delivery_charge)?;

        Ok(PriceBreakdown {
            items_price,
            weights,
            base_delivery_charge,
            delivery_discount: discounts.delivery_discount,
            product_discount: discounts.product_discount,
            payable_delivery_charge,
            coupon_discount,
            final_product_total,
            grand_total,
            payable_now: split.payable_now,
            remaining: split.remaining,
        })
    }
}
