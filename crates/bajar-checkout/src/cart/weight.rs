//! Cart weight aggregation.
//!
//! Splits line items into free-delivery-eligible and paid-delivery subsets
//! and sums weight per subset. The partition is exact: the two subsets
//! always add up to the total.

use crate::cart::CartSnapshot;
use serde::{Deserialize, Serialize};

/// Weight totals for a cart, partitioned by free-delivery eligibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct WeightBreakdown {
    /// Sum over all items, in kilograms.
    pub total_kg: f64,
    /// Sum over items flagged free-delivery.
    pub free_delivery_kg: f64,
    /// Sum over items not flagged free-delivery.
    pub paid_delivery_kg: f64,
}

impl WeightBreakdown {
    /// Aggregate the weights of a cart snapshot.
    ///
    /// Pure function of the snapshot; missing or non-finite weights count
    /// as zero.
    pub fn from_cart(cart: &CartSnapshot) -> Self {
        let mut free = 0.0;
        let mut paid = 0.0;
        for item in &cart.items {
            let w = item.line_weight();
            if item.free_delivery {
                free += w;
            } else {
                paid += w;
            }
        }
        Self {
            total_kg: free + paid,
            free_delivery_kg: free,
            paid_delivery_kg: paid,
        }
    }

    /// Whether any item in the cart carries weight.
    pub fn is_weightless(&self) -> bool {
        self.total_kg <= 0.0
    }
}
