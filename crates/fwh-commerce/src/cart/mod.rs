//! Shopping cart module.
//!
//! Contains the cart, its lines and variants, and pricing breakdowns.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, Variant};
pub use pricing::{CartPricing, LinePricing};
