//! Bulk deals and quantity-tier quotes.

use crate::ids::DealId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A flat-priced bulk package advertised on the promotions page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkDeal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Display label (e.g., "20 Jerseys").
    pub label: String,
    /// Package price.
    pub price: Money,
    /// Per-unit note shown alongside the price.
    pub note: String,
}

impl BulkDeal {
    /// Create a new bulk deal.
    pub fn new(
        id: impl Into<DealId>,
        label: impl Into<String>,
        price: Money,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price,
            note: note.into(),
        }
    }
}

/// A priced bulk quote for a requested quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkQuote {
    /// Quantity the quote was computed for.
    pub quantity: u32,
    /// Per-unit price at this tier.
    pub unit_price: Money,
    /// Estimated total.
    pub total: Money,
}

impl BulkQuote {
    /// Price a quantity against the bulk tier table.
    ///
    /// Under 100 units the package is a flat $340 at $17 apiece; 100 to
    /// 999 units is a flat $389 at $3.89 apiece; from 1,000 units the
    /// total is $5 per unit. The flat totals inside the lower tiers are
    /// the advertised promotional packages, not a per-unit computation.
    pub fn for_quantity(quantity: u32) -> Self {
        let (unit_price, total) = if quantity >= 1000 {
            (Money::new(500), Money::new(500) * quantity as i64)
        } else if quantity >= 100 {
            (Money::new(389), Money::new(38_900))
        } else {
            (Money::new(1_700), Money::new(34_000))
        };
        Self {
            quantity,
            unit_price,
            total,
        }
    }
}
