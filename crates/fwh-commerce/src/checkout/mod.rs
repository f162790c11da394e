//! Checkout module.
//!
//! Contains the forward-only checkout step machine and its two forms.

mod customer;
mod flow;
mod payment;

pub use customer::CustomerInfo;
pub use flow::{CheckoutFlow, CheckoutStep};
pub use payment::{PaymentInfo, PaymentMethod};
