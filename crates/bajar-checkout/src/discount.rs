//! Delivery-related discounts and coupon types.
//!
//! Two separate discount channels feed the product side of the breakdown:
//! the free-delivery discounts resolved here, then the server-resolved
//! coupon amount. The customer always pays the full computed delivery
//! charge; free delivery is refunded as a product price reduction, except
//! for the order-wide threshold case where the delivery fee itself is the
//! discounted entry.

use crate::cart::WeightBreakdown;
use crate::delivery::{ChargeConfig, DeliveryTariff};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How a coupon's value is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Percentage off the subtotal.
    Percentage,
    /// Fixed amount off.
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }
}

/// An applied coupon as returned by the coupon API.
///
/// `discount_amount` is resolved server-side for the given subtotal and is
/// treated as authoritative; the client never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CouponSnapshot {
    /// Coupon code (e.g., "SAVE10").
    pub code: String,
    /// How the discount value is expressed.
    pub discount_type: DiscountType,
    /// The raw discount value (percent or fixed taka, per type).
    pub discount_value: f64,
    /// The resolved discount amount for this order's subtotal.
    pub discount_amount: Money,
}

/// Resolved free-delivery discounts for one cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeliveryDiscounts {
    /// Amount of the delivery charge that is waived (order-wide case only).
    pub delivery_discount: Money,
    /// Product price reduction attributable to free-delivery items.
    pub product_discount: Money,
}

impl DeliveryDiscounts {
    /// Resolve the free-delivery discounts for a cart.
    ///
    /// Rules, evaluated in order:
    /// 1. Order-wide: subtotal at or above the configured threshold waives
    ///    the whole delivery charge.
    /// 2. Per-item: free-delivery items refund the charge attributable to
    ///    their weight, as a product price reduction.
    /// 3. Otherwise both discounts are zero.
    pub fn resolve(
        items_price: &Money,
        base_delivery_charge: &Money,
        charge_config: Option<&ChargeConfig>,
        district: &str,
        weights: &WeightBreakdown,
        tariff: &DeliveryTariff,
    ) -> Self {
        let zero = Money::zero(items_price.currency);

        if let Some(config) = charge_config {
            if config.waives_delivery(items_price) {
                return Self {
                    delivery_discount: *base_delivery_charge,
                    product_discount: zero,
                };
            }
        }

        if weights.free_delivery_kg > 0.0 {
            return Self {
                delivery_discount: zero,
                product_discount: tariff.charge(district, weights.free_delivery_kg),
            };
        }

        Self {
            delivery_discount: zero,
            product_discount: zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn taka(amount: i64) -> Money {
        Money::from_major(amount, Currency::BDT)
    }

    fn weights(free: f64, paid: f64) -> WeightBreakdown {
        WeightBreakdown {
            total_kg: free + paid,
            free_delivery_kg: free,
            paid_delivery_kg: paid,
        }
    }

    #[test]
    fn test_order_wide_waiver() {
        let config = ChargeConfig { price: taka(1000) };
        let discounts = DeliveryDiscounts::resolve(
            &taka(1200),
            &taka(140),
            Some(&config),
            "Dhaka",
            &weights(0.5, 1.5),
            &DeliveryTariff::default(),
        );
        // Whole delivery charge waived; per-item accounting skipped.
        assert_eq!(discounts.delivery_discount, taka(140));
        assert!(discounts.product_discount.is_zero());
    }

    #[test]
    fn test_per_item_free_delivery() {
        let discounts = DeliveryDiscounts::resolve(
            &taka(500),
            &taka(140),
            None,
            "Dhaka",
            &weights(1.2, 0.8),
            &DeliveryTariff::default(),
        );
        // charge("Dhaka", 1.2) = 100 + ceil(0.2) * 20 = 120, refunded on
        // the product side; the delivery fee is untouched.
        assert!(discounts.delivery_discount.is_zero());
        assert_eq!(discounts.product_discount, taka(120));
    }

    #[test]
    fn test_threshold_beats_per_item() {
        let config = ChargeConfig { price: taka(400) };
        let discounts = DeliveryDiscounts::resolve(
            &taka(500),
            &taka(140),
            Some(&config),
            "Dhaka",
            &weights(1.2, 0.8),
            &DeliveryTariff::default(),
        );
        assert_eq!(discounts.delivery_discount, taka(140));
        assert!(discounts.product_discount.is_zero());
    }

    #[test]
    fn test_no_discounts() {
        let discounts = DeliveryDiscounts::resolve(
            &taka(500),
            &taka(100),
            None,
            "Dhaka",
            &weights(0.0, 0.8),
            &DeliveryTariff::default(),
        );
        assert!(discounts.delivery_discount.is_zero());
        assert!(discounts.product_discount.is_zero());
    }

    #[test]
    fn test_coupon_snapshot_wire_shape() {
        let coupon = CouponSnapshot {
            code: "SAVE10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            discount_amount: taka(50),
        };
        let json = serde_json::to_value(&coupon).unwrap();
        assert_eq!(json["discountType"], "percentage");
        assert_eq!(json["code"], "SAVE10");
    }
}
