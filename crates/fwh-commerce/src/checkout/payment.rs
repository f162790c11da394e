//! Payment form.

use serde::{Deserialize, Serialize};

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Credit or debit card, the only method in the prototype.
    #[default]
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }
}

/// Payment details collected at checkout.
///
/// Free text, never validated and never charged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    /// Selected payment method.
    pub method: PaymentMethod,
    /// Card number as entered.
    pub card_number: String,
    /// Expiry as entered (e.g., "MM/YY").
    pub expiry: String,
    /// Security code as entered.
    pub cvc: String,
}
