//! Payment types and the staged payment split.

use crate::error::CheckoutError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// How the order total is staged across payment events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentType {
    /// Pay the full amount up front.
    #[default]
    #[serde(rename = "full")]
    Full,
    /// Cash on delivery: only the delivery fee is collected up front.
    #[serde(rename = "delivery_only")]
    CashOnDelivery,
    /// Pre-order: half the product total up front, half on delivery.
    #[serde(rename = "preorder")]
    PreOrder,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Full => "full",
            PaymentType::CashOnDelivery => "delivery_only",
            PaymentType::PreOrder => "preorder",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Full => "Full payment",
            PaymentType::CashOnDelivery => "Cash on delivery",
            PaymentType::PreOrder => "Pre-order",
        }
    }
}

/// Payment gateway / instrument selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// EPS gateway redirect flow.
    Eps,
    Bkash,
    Nagad,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Eps => "eps",
            PaymentMethod::Bkash => "bkash",
            PaymentMethod::Nagad => "nagad",
            PaymentMethod::Card => "card",
        }
    }
}

/// Amount payable immediately vs. deferred to delivery time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSplit {
    /// Collected now, through the gateway.
    pub payable_now: Money,
    /// Collected on delivery.
    pub remaining: Money,
}

impl PaymentType {
    /// Split the order total into payable-now and deferred parts.
    ///
    /// The delivery charge is always part of payable-now, for every
    /// payment type. The pre-order deferred half is rounded down so the
    /// two parts always reconstruct the grand total exactly.
    pub fn split(
        &self,
        final_product_total: &Money,
        payable_delivery_charge: &Money,
    ) -> Result<PaymentSplit, CheckoutError> {
        if final_product_total.currency != payable_delivery_charge.currency {
            return Err(CheckoutError::CurrencyMismatch {
                expected: final_product_total.currency.code().to_string(),
                got: payable_delivery_charge.currency.code().to_string(),
            });
        }

        let currency = final_product_total.currency;
        let (now_product, deferred) = match self {
            PaymentType::Full => (*final_product_total, Money::zero(currency)),
            PaymentType::CashOnDelivery => (Money::zero(currency), *final_product_total),
            PaymentType::PreOrder => {
                let deferred = Money::new(final_product_total.amount_cents / 2, currency);
                let now = final_product_total
                    .try_subtract(&deferred)
                    .ok_or(CheckoutError::Overflow)?;
                (now, deferred)
            }
        };

        let payable_now = now_product
            .try_add(payable_delivery_charge)
            .ok_or(CheckoutError::Overflow)?;

        Ok(PaymentSplit {
            payable_now,
            remaining: deferred,
        })
    }
}

impl PaymentSplit {
    /// Enforce that the delivery charge is never deferred.
    pub fn ensure_delivery_charge_paid(
        &self,
        payable_delivery_charge: &Money,
    ) -> Result<(), CheckoutError> {
        if payable_delivery_charge.is_positive()
            && self.payable_now.amount_cents < payable_delivery_charge.amount_cents
        {
            return Err(CheckoutError::DeliveryChargeDeferred {
                charge: payable_delivery_charge.display(),
                payable_now: self.payable_now.display(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn taka(amount: i64) -> Money {
        Money::from_major(amount, Currency::BDT)
    }

    #[test]
    fn test_full_payment() {
        let split = PaymentType::Full.split(&taka(500), &taka(100)).unwrap();
        assert_eq!(split.payable_now, taka(600));
        assert!(split.remaining.is_zero());
    }

    #[test]
    fn test_cash_on_delivery() {
        let split = PaymentType::CashOnDelivery
            .split(&taka(500), &taka(100))
            .unwrap();
        assert_eq!(split.payable_now, taka(100));
        assert_eq!(split.remaining, taka(500));
    }

    #[test]
    fn test_preorder_half_split() {
        let split = PaymentType::PreOrder.split(&taka(500), &taka(100)).unwrap();
        assert_eq!(split.payable_now, taka(350));
        assert_eq!(split.remaining, taka(250));
    }

    #[test]
    fn test_preorder_odd_amount_reconstructs_total() {
        // 333.33 taka cannot be halved evenly; the extra poisha stays in
        // the up-front part.
        let total = Money::new(33_333, Currency::BDT);
        let charge = taka(100);
        let split = PaymentType::PreOrder.split(&total, &charge).unwrap();
        assert_eq!(
            split.payable_now.amount_cents + split.remaining.amount_cents,
            total.amount_cents + charge.amount_cents
        );
        assert!(split.payable_now.amount_cents >= charge.amount_cents);
    }

    #[test]
    fn test_split_reconstructs_grand_total_for_all_types() {
        let product = taka(777);
        let charge = taka(130);
        for payment_type in [
            PaymentType::Full,
            PaymentType::CashOnDelivery,
            PaymentType::PreOrder,
        ] {
            let split = payment_type.split(&product, &charge).unwrap();
            assert_eq!(
                split.payable_now.amount_cents + split.remaining.amount_cents,
                product.amount_cents + charge.amount_cents,
                "split for {:?} does not reconstruct the grand total",
                payment_type
            );
        }
    }

    #[test]
    fn test_delivery_charge_never_deferred() {
        let charge = taka(100);
        for payment_type in [
            PaymentType::Full,
            PaymentType::CashOnDelivery,
            PaymentType::PreOrder,
        ] {
            let split = payment_type.split(&taka(500), &charge).unwrap();
            assert!(split.ensure_delivery_charge_paid(&charge).is_ok());
        }

        let bad = PaymentSplit {
            payable_now: taka(50),
            remaining: taka(550),
        };
        assert!(bad.ensure_delivery_charge_paid(&charge).is_err());
    }

    #[test]
    fn test_currency_mismatch() {
        let result = PaymentType::Full.split(&taka(500), &Money::from_major(1, Currency::USD));
        assert!(matches!(result, Err(CheckoutError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(PaymentType::CashOnDelivery).unwrap(),
            "delivery_only"
        );
        assert_eq!(serde_json::to_value(PaymentType::PreOrder).unwrap(), "preorder");
    }
}
