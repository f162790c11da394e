//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product ID did not resolve against the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Two catalog products share an ID.
    #[error("Duplicate product ID in catalog: {0}")]
    DuplicateProduct(String),

    /// Two bulk deals share an ID.
    #[error("Duplicate deal ID in catalog: {0}")]
    DuplicateDeal(String),

    /// A catalog product has a zero or negative price.
    #[error("Non-positive price for product: {0}")]
    NonPositivePrice(String),

    /// A catalog product rating is outside the 0 to 5 scale.
    #[error("Rating {rating} out of range for product: {product_id}")]
    RatingOutOfRange { product_id: String, rating: f64 },

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
