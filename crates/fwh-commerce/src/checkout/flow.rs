//! Checkout flow state machine.

use crate::checkout::{CustomerInfo, PaymentInfo};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Customer contact and shipping details.
    #[default]
    Customer,
    /// Payment details.
    Payment,
    /// Order review before placement.
    Review,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Customer => "customer",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Customer => "Customer",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Customer => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }
}

/// Checkout flow state.
///
/// The flow only moves forward: Customer, then Payment, then Review, then
/// a terminal placed flag. Both forms are free text and nothing gates
/// progression on their contents; abandoning checkout resets everything.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    placed: bool,
    /// Customer contact and shipping form.
    pub customer: CustomerInfo,
    /// Payment form.
    pub payment: PaymentInfo,
}

impl CheckoutFlow {
    /// Create a flow at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Whether the order has been placed.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Advance to the next step.
    ///
    /// Fails at Review (the order must be placed instead) and after
    /// placement. Form contents are never checked.
    pub fn advance(&mut self) -> Result<CheckoutStep, StoreError> {
        if self.placed {
            return Err(StoreError::InvalidCheckoutTransition {
                from: "placed".to_string(),
                to: "none".to_string(),
            });
        }
        let next = match self.step {
            CheckoutStep::Customer => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Review,
            CheckoutStep::Review => {
                return Err(StoreError::InvalidCheckoutTransition {
                    from: "review".to_string(),
                    to: "none".to_string(),
                })
            }
        };
        self.step = next;
        Ok(next)
    }

    /// Place the order.
    ///
    /// Only valid at the Review step, and only once.
    pub fn place(&mut self) -> Result<(), StoreError> {
        if self.placed {
            return Err(StoreError::InvalidCheckoutTransition {
                from: "placed".to_string(),
                to: "placed".to_string(),
            });
        }
        if self.step != CheckoutStep::Review {
            return Err(StoreError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "placed".to_string(),
            });
        }
        self.placed = true;
        Ok(())
    }

    /// Reset to the first step, discarding both forms and the placed flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
