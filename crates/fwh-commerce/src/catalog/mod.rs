//! Product catalog module.
//!
//! Contains the catalog store, product and deal types, filtering, and
//! bulk tier quotes.

mod deal;
mod filter;
mod product;
mod store;

pub use deal::{BulkDeal, BulkQuote};
pub use filter::FilterCriteria;
pub use product::{Category, ImageRef, Product, ProductKind};
pub use store::Catalog;
