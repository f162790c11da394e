//! Cart pricing breakdown types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
///
/// Computed on demand from the catalog; nothing here is cached on the
/// cart lines themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost. The prototype always ships free.
    pub shipping_total: Money,
    /// Final total.
    pub grand_total: Money,
    /// Per-line pricing. Lines whose product is gone are absent.
    pub lines: Vec<LinePricing>,
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePricing {
    /// Index of the line in the cart.
    pub line: usize,
    /// Unit price read from the catalog.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Line total (unit price times quantity).
    pub total: Money,
}
