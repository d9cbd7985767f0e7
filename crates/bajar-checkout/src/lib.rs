//! Checkout domain types and pricing engine for the Bajar storefront.
//!
//! This crate holds the storefront's checkout pricing engine:
//!
//! - **Cart**: immutable cart snapshot, weight aggregation
//! - **Delivery**: district/weight tiered charge, free-delivery threshold
//! - **Discounts**: free-delivery attribution, coupon snapshots
//! - **Payment**: COD / pre-order / full staged payment split
//! - **Checkout**: shipping info, order assembly, session state
//!
//! All pricing is pure and synchronous; every input is an explicit
//! parameter and the breakdown is re-derived on each call. The server
//! remains the source of truth — everything computed here is advisory
//! and re-validated server-side at submission.
//!
//! # Example
//!
//! ```
//! use bajar_checkout::prelude::*;
//!
//! let item = CartItem::new(
//!     ProductId::new("prod-1"),
//!     "Cotton Panjabi",
//!     Money::from_major(500, Currency::BDT),
//!     1,
//! )
//! .unwrap()
//! .with_weight(0.8);
//!
//! let mut session = CheckoutSession::new(CartSnapshot::new(vec![item], Currency::BDT));
//! session.shipping.district = "Dhaka".to_string();
//!
//! let breakdown = session.breakdown().unwrap();
//! assert_eq!(breakdown.grand_total, Money::from_major(600, Currency::BDT));
//! ```

pub mod cart;
pub mod checkout;
pub mod delivery;
pub mod discount;
pub mod districts;
pub mod error;
pub mod ids;
pub mod money;
pub mod payment;
pub mod pricing;

pub use error::CheckoutError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CheckoutError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{CartItem, CartSnapshot, WeightBreakdown};

    // Delivery & discounts
    pub use crate::delivery::{ChargeConfig, DeliveryTariff};
    pub use crate::discount::{CouponSnapshot, DeliveryDiscounts, DiscountType};

    // Payment
    pub use crate::payment::{PaymentMethod, PaymentSplit, PaymentType};

    // Pricing
    pub use crate::pricing::{PriceBreakdown, PricingInput};

    // Checkout
    pub use crate::checkout::{
        CheckoutSession, OrderStatus, OrderSubmission, PaymentInfo, PaymentStatus, ShippingInfo,
    };
}
