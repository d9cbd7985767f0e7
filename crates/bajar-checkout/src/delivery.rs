//! Delivery charge calculation.
//!
//! The charge is a tiered function of destination district and parcel
//! weight. It is invoked independently for different weight subsets of
//! the same cart (full order weight, free-delivery weight), so it must be
//! a pure function: the results have to be commensurable.

use crate::districts::is_dhaka_metro;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Delivery rate card.
///
/// All rates are in whole taka. `Default` carries the production rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeliveryTariff {
    /// Base charge inside the Dhaka tier.
    pub dhaka_base: i64,
    /// Charge outside Dhaka for parcels up to 0.5 kg.
    pub outside_half_kg: i64,
    /// Base charge outside Dhaka for parcels up to 1 kg (and above).
    pub outside_base: i64,
    /// Surcharge per started kilogram above 1 kg, both tiers.
    pub per_extra_kg: i64,
    /// Currency the tariff is denominated in.
    pub currency: Currency,
}

impl Default for DeliveryTariff {
    fn default() -> Self {
        Self {
            dhaka_base: 100,
            outside_half_kg: 110,
            outside_base: 130,
            per_extra_kg: 20,
            currency: Currency::BDT,
        }
    }
}

impl DeliveryTariff {
    /// Compute the delivery charge for a destination and weight.
    ///
    /// Zero for an empty district or non-positive weight. Above 1 kg every
    /// started kilogram adds the per-kg surcharge, in both tiers.
    pub fn charge(&self, district: &str, weight_kg: f64) -> Money {
        if weight_kg <= 0.0 || district.trim().is_empty() {
            return Money::zero(self.currency);
        }

        let extra_kg = if weight_kg > 1.0 {
            (weight_kg - 1.0).ceil() as i64
        } else {
            0
        };

        let taka = if is_dhaka_metro(district) {
            self.dhaka_base + extra_kg * self.per_extra_kg
        } else if weight_kg <= 0.5 {
            self.outside_half_kg
        } else {
            self.outside_base + extra_kg * self.per_extra_kg
        };

        Money::from_major(taka, self.currency)
    }
}

/// Admin-configured order-wide free-delivery threshold.
///
/// Fetched from `GET /api/v1/charges`; when the product subtotal reaches
/// `price`, the whole order's delivery charge is waived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargeConfig {
    /// Minimum product subtotal for order-wide free delivery.
    pub price: Money,
}

impl ChargeConfig {
    /// Whether an order at this subtotal qualifies for order-wide free
    /// delivery.
    pub fn waives_delivery(&self, items_price: &Money) -> bool {
        items_price.currency == self.price.currency
            && items_price.amount_cents >= self.price.amount_cents
    }
}
