//! Order assembly and pre-submission validation.

use crate::cart::{CartItem, CartSnapshot};
use crate::checkout::ShippingInfo;
use crate::discount::CouponSnapshot;
use crate::error::CheckoutError;
use crate::ids::OrderId;
use crate::money::Money;
use crate::payment::{PaymentMethod, PaymentType};
use crate::pricing::PriceBreakdown;
use serde::{Deserialize, Serialize};

/// Order status, for the tracking surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed and processing.
    Confirmed,
    /// Order handed to the courier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Payment status carried on the submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting gateway confirmation.
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Payment details on the submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Selected gateway / instrument.
    pub method: PaymentMethod,
    /// Payment staging.
    pub payment_type: PaymentType,
    /// Amount collected through the gateway now.
    pub amount: Money,
    /// Gateway status at submission time.
    pub status: PaymentStatus,
}

/// The assembled order payload sent to `POST /api/v1/payment/initialize`.
///
/// Created once per checkout attempt and not mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Client-side order identifier.
    pub order_id: OrderId,
    /// Line items, as priced.
    pub items: Vec<CartItem>,
    /// Destination and contact details.
    pub shipping: ShippingInfo,
    /// Payment method, staging, amount and status.
    pub payment: PaymentInfo,
    /// Itemized price fields, copied from the breakdown.
    pub items_price: Money,
    pub delivery_charge: Money,
    pub delivery_discount: Money,
    pub product_discount: Money,
    pub coupon_discount: Money,
    pub grand_total: Money,
    /// Amount deferred to delivery time.
    pub remaining: Money,
    /// Applied coupon snapshot, or None.
    pub coupon: Option<CouponSnapshot>,
    /// Order status at submission.
    pub status: OrderStatus,
}

impl OrderSubmission {
    /// Assemble and validate the submission payload.
    ///
    /// Validation failures block submission entirely; no partial payload
    /// is ever produced. Checks, in order: non-empty cart, complete
    /// shipping fields, a selected payment method, accepted terms, no COD
    /// on pre-order items, and the delivery-charge-must-be-paid rule.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        cart: &CartSnapshot,
        shipping: &ShippingInfo,
        breakdown: &PriceBreakdown,
        method: Option<PaymentMethod>,
        payment_type: PaymentType,
        coupon: Option<&CouponSnapshot>,
        terms_accepted: bool,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        shipping.validate()?;
        let method = method.ok_or(CheckoutError::NoPaymentMethod)?;
        if !terms_accepted {
            return Err(CheckoutError::TermsNotAccepted);
        }
        if payment_type == PaymentType::CashOnDelivery && cart.has_pre_order_items() {
            return Err(CheckoutError::CodOnPreOrder);
        }
        if breakdown.payable_delivery_charge.is_positive()
            && breakdown.payable_now.amount_cents < breakdown.payable_delivery_charge.amount_cents
        {
            return Err(CheckoutError::DeliveryChargeDeferred {
                charge: breakdown.payable_delivery_charge.display(),
                payable_now: breakdown.payable_now.display(),
            });
        }

        Ok(Self {
            order_id: OrderId::generate(),
            items: cart.items.clone(),
            shipping: shipping.clone(),
            payment: PaymentInfo {
                method,
                payment_type,
                amount: breakdown.payable_now,
                status: PaymentStatus::Pending,
            },
            items_price: breakdown.items_price,
            delivery_charge: breakdown.payable_delivery_charge,
            delivery_discount: breakdown.delivery_discount,
            product_discount: breakdown.product_discount,
            coupon_discount: breakdown.coupon_discount,
            grand_total: breakdown.grand_total,
            remaining: breakdown.remaining,
            coupon: coupon.cloned(),
            status: OrderStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DeliveryTariff;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use crate::pricing::PricingInput;

    fn taka(amount: i64) -> Money {
        Money::from_major(amount, Currency::BDT)
    }

    fn cart(pre_order: bool) -> CartSnapshot {
        let item = CartItem::new(ProductId::generate(), "Panjabi", taka(500), 1)
            .unwrap()
            .with_weight(0.8)
            .with_pre_order(pre_order);
        CartSnapshot::new(vec![item], Currency::BDT)
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            name: "Karim".to_string(),
            phone: "01800000000".to_string(),
            email: "karim@example.com".to_string(),
            address: "Flat 3B".to_string(),
            district: "Dhaka".to_string(),
            thana: "Mirpur".to_string(),
            zip_code: "1216".to_string(),
            country: "Bangladesh".to_string(),
        }
    }

    fn breakdown(cart: &CartSnapshot, payment_type: PaymentType) -> PriceBreakdown {
        PricingInput {
            cart,
            district: "Dhaka",
            charge_config: None,
            coupon: None,
            payment_type,
            tariff: &DeliveryTariff::default(),
        }
        .quote()
        .unwrap()
    }

    #[test]
    fn test_assemble_success() {
        let cart = cart(false);
        let breakdown = breakdown(&cart, PaymentType::Full);
        let order = OrderSubmission::assemble(
            &cart,
            &shipping(),
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::Full,
            None,
            true,
        )
        .unwrap();

        assert_eq!(order.payment.amount, taka(600));
        assert_eq!(order.payment.status, PaymentStatus::Pending);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.grand_total, taka(600));
        assert!(order.coupon.is_none());
    }

    #[test]
    fn test_rejects_missing_method() {
        let cart = cart(false);
        let breakdown = breakdown(&cart, PaymentType::Full);
        let result = OrderSubmission::assemble(
            &cart,
            &shipping(),
            &breakdown,
            None,
            PaymentType::Full,
            None,
            true,
        );
        assert_eq!(result, Err(CheckoutError::NoPaymentMethod));
    }

    #[test]
    fn test_rejects_unaccepted_terms() {
        let cart = cart(false);
        let breakdown = breakdown(&cart, PaymentType::Full);
        let result = OrderSubmission::assemble(
            &cart,
            &shipping(),
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::Full,
            None,
            false,
        );
        assert_eq!(result, Err(CheckoutError::TermsNotAccepted));
    }

    #[test]
    fn test_rejects_cod_on_pre_order() {
        let cart = cart(true);
        let breakdown = breakdown(&cart, PaymentType::CashOnDelivery);
        let result = OrderSubmission::assemble(
            &cart,
            &shipping(),
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::CashOnDelivery,
            None,
            true,
        );
        assert_eq!(result, Err(CheckoutError::CodOnPreOrder));
    }

    #[test]
    fn test_rejects_incomplete_shipping() {
        let cart = cart(false);
        let breakdown = breakdown(&cart, PaymentType::Full);
        let mut info = shipping();
        info.phone = String::new();
        let result = OrderSubmission::assemble(
            &cart,
            &info,
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::Full,
            None,
            true,
        );
        assert_eq!(result, Err(CheckoutError::MissingShippingField("phone")));
    }

    #[test]
    fn test_rejects_empty_cart() {
        let empty = CartSnapshot::new(vec![], Currency::BDT);
        let full_cart = cart(false);
        let breakdown = breakdown(&full_cart, PaymentType::Full);
        let result = OrderSubmission::assemble(
            &empty,
            &shipping(),
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::Full,
            None,
            true,
        );
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let cart = cart(false);
        let breakdown = breakdown(&cart, PaymentType::Full);
        let order = OrderSubmission::assemble(
            &cart,
            &shipping(),
            &breakdown,
            Some(PaymentMethod::Eps),
            PaymentType::Full,
            None,
            true,
        )
        .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("itemsPrice").is_some());
        assert!(json.get("deliveryCharge").is_some());
        assert!(json.get("grandTotal").is_some());
        assert_eq!(json["payment"]["paymentType"], "full");
        assert_eq!(json["status"], "pending");
    }
}
