//! Storefront domain types and logic for Fashion With Heart.
//!
//! This crate models a complete storefront session in memory:
//!
//! - **Catalog**: Products, bulk deals, listing filters
//! - **Cart**: Merging line items keyed by product and customization
//! - **Checkout**: Three-step flow with a terminal placed state
//! - **Customizer**: Garment personalization form
//! - **Storefront**: The session controller tying it all together
//!
//! # Example
//!
//! ```rust
//! use fwh_commerce::prelude::*;
//!
//! let mut store = Storefront::new(Catalog::demo());
//!
//! // Browse jerseys.
//! store.filter = FilterCriteria::new().with_query("jersey");
//! let hits = store.filtered_products();
//! assert!(!hits.is_empty());
//!
//! // Add one to the cart and head to checkout.
//! let id = hits[0].id.clone();
//! store.add_to_cart(id, 2, Variant::none()).unwrap();
//! store.goto(Page::Checkout);
//!
//! let pricing = store.cart_pricing();
//! println!("Total: {}", pricing.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customizer;
pub mod storefront;

pub use error::StoreError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        BulkDeal, BulkQuote, Catalog, Category, FilterCriteria, ImageRef, Product, ProductKind,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, LinePricing, Variant};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, CustomerInfo, PaymentInfo, PaymentMethod,
    };

    // Customizer
    pub use crate::customizer::{
        BaseGarment, CustomizerForm, GarmentColor, GarmentSize, ImageCapture, CUSTOM_JERSEY_ID,
    };

    // Storefront
    pub use crate::storefront::{
        CheckoutView, Page, Storefront, StorefrontEvents, BULK_QUANTITY_MAX, BULK_QUANTITY_MIN,
    };
}
