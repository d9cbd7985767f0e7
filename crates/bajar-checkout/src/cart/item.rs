//! Cart line items and the immutable cart snapshot.

use crate::error::CheckoutError;
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One product/variant in the cart.
///
/// Constructed by the product/cart pages when the user adds to cart or
/// lands on checkout via "Buy Now". Immutable for the duration of one
/// checkout session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line identity within the cart.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Product image URL (display only).
    pub image: Option<String>,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity (positive).
    pub quantity: i64,
    /// Weight in kilograms; absent is treated as zero.
    pub weight: Option<f64>,
    /// Whether the catalog marks this product free-delivery.
    pub free_delivery: bool,
    /// Whether this is a pre-order product (not yet in stock).
    pub pre_order: bool,
    /// Variant size selector (display and line identity, not pricing).
    pub size: Option<String>,
    /// Variant color selector (display and line identity, not pricing).
    pub color: Option<String>,
}

impl CartItem {
    /// Create a new cart item.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<Self, CheckoutError> {
        if quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity(quantity));
        }
        Ok(Self {
            id: LineItemId::generate(),
            product_id,
            name: name.into(),
            image: None,
            unit_price,
            quantity,
            weight: None,
            free_delivery: false,
            pre_order: false,
            size: None,
            color: None,
        })
    }

    /// Set the item weight in kilograms.
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight = Some(weight_kg);
        self
    }

    /// Mark the item as free-delivery.
    pub fn with_free_delivery(mut self, free: bool) -> Self {
        self.free_delivery = free;
        self
    }

    /// Mark the item as a pre-order product.
    pub fn with_pre_order(mut self, pre_order: bool) -> Self {
        self.pre_order = pre_order;
        self
    }

    /// Set the variant selectors.
    pub fn with_variant(mut self, size: Option<String>, color: Option<String>) -> Self {
        self.size = size;
        self.color = color;
        self
    }

    /// Unit weight, with missing or non-finite values treated as zero.
    pub fn unit_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 0.0,
        }
    }

    /// Total weight contribution of this line (unit weight * quantity).
    pub fn line_weight(&self) -> f64 {
        self.unit_weight() * self.quantity as f64
    }

    /// Total price for this line (unit price * quantity).
    pub fn line_total(&self) -> Result<Money, CheckoutError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CheckoutError::Overflow)
    }
}

/// An immutable snapshot of the cart taken when checkout begins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Items in the cart.
    pub items: Vec<CartItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl CartSnapshot {
    /// Create a snapshot from a list of items.
    pub fn new(items: Vec<CartItem>, currency: Currency) -> Self {
        Self { items, currency }
    }

    /// Check if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Product subtotal across all lines.
    pub fn items_price(&self) -> Result<Money, CheckoutError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let line = item.line_total()?;
            total = total.try_add(&line).ok_or(CheckoutError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.currency.code().to_string(),
            })?;
        }
        Ok(total)
    }

    /// Whether any line is a pre-order product.
    pub fn has_pre_order_items(&self) -> bool {
        self.items.iter().any(|i| i.pre_order)
    }

    /// Product IDs across all lines (for coupon eligibility checks).
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|i| i.product_id.clone()).collect()
    }
}
