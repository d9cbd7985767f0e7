//! Shipping info, order assembly and session state.

mod order;
mod session;
mod shipping;

pub use order::{OrderStatus, OrderSubmission, PaymentInfo, PaymentStatus};
pub use session::CheckoutSession;
pub use shipping::ShippingInfo;
