//! Cart snapshot and weight aggregation.

mod item;
mod weight;

pub use item::{CartItem, CartSnapshot};
pub use weight::WeightBreakdown;
