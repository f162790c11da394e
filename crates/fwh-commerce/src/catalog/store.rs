//! Catalog construction, validation, and lookup.

use crate::catalog::{BulkDeal, Category, Product, ProductKind};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 3;

/// The product catalog: every product and bulk deal in the store.
///
/// Catalogs are validated on construction and immutable afterwards, so
/// every ID handed out by a catalog lookup stays good for the session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    deals: Vec<BulkDeal>,
}

/// Serialized catalog document (`{ "products": [...], "deals": [...] }`).
#[derive(Debug, Deserialize)]
struct CatalogSeed {
    products: Vec<Product>,
    #[serde(default)]
    deals: Vec<BulkDeal>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid data up front.
    ///
    /// Fails on duplicate product or deal IDs, non-positive prices, and
    /// ratings outside the 0 to 5 scale. A catalog that constructs is
    /// valid for the lifetime of the session.
    pub fn new(products: Vec<Product>, deals: Vec<BulkDeal>) -> Result<Self, StoreError> {
        let mut ids = HashSet::new();
        for product in &products {
            if !ids.insert(product.id.clone()) {
                return Err(StoreError::DuplicateProduct(product.id.to_string()));
            }
            if !product.price.is_positive() {
                return Err(StoreError::NonPositivePrice(product.id.to_string()));
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(StoreError::RatingOutOfRange {
                    product_id: product.id.to_string(),
                    rating: product.rating,
                });
            }
        }

        let mut ids = HashSet::new();
        for deal in &deals {
            if !ids.insert(deal.id.clone()) {
                return Err(StoreError::DuplicateDeal(deal.id.to_string()));
            }
        }

        Ok(Self { products, deals })
    }

    /// Load a catalog from a JSON document with `products` and `deals`
    /// arrays, validating as in [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        Self::new(seed.products, seed.deals)
    }

    /// The built-in demo catalog used when no seed is supplied.
    pub fn demo() -> Self {
        let products = vec![
            Product::new(
                "sr-1001",
                "Silk Saree – Rose Blush",
                Money::new(6_900),
                Category::Women,
            )
            .with_rating(4.7)
            .with_image("https://images.unsplash.com/photo-1610030469983-98cbe2c5b735?q=80&w=1600&auto=format&fit=crop")
            .with_tag("saree")
            .with_tag("party-wear"),
            Product::new(
                "ts-2001",
                "Custom Team Jersey – Cricket",
                Money::new(2_400),
                Category::Sports,
            )
            .with_kind(ProductKind::Custom)
            .customizable()
            .with_rating(4.8)
            .with_image("https://images.unsplash.com/photo-1546519638-68e109498ffc?q=80&w=1600&auto=format&fit=crop")
            .with_tag("cricket")
            .with_tag("jersey")
            .with_tag("custom"),
            Product::new(
                "pn-3001",
                "Mens Panjabi – Classic White",
                Money::new(3_900),
                Category::Men,
            )
            .with_rating(4.6)
            .with_image("https://images.unsplash.com/photo-1587271407850-8d438ca9fdf9?q=80&w=1600&auto=format&fit=crop")
            .with_tag("panjabi")
            .with_tag("eid"),
            Product::new(
                "ts-2002",
                "Custom Polo Shirt",
                Money::new(1_900),
                Category::Custom,
            )
            .with_kind(ProductKind::Custom)
            .customizable()
            .with_rating(4.5)
            .with_image("https://images.unsplash.com/photo-1618354691227-25bc04584b2d?q=80&w=1600&auto=format&fit=crop")
            .with_tag("polo")
            .with_tag("logo"),
            Product::new(
                "dr-4001",
                "Party Dress – Midnight Blue",
                Money::new(7_900),
                Category::Women,
            )
            .with_rating(4.9)
            .with_image("https://images.unsplash.com/photo-1483985988355-763728e1935b?q=80&w=1600&auto=format&fit=crop")
            .with_tag("dress")
            .with_tag("party"),
            Product::new(
                "sc-5001",
                "Custom Soccer Jersey",
                Money::new(2_400),
                Category::Sports,
            )
            .with_kind(ProductKind::Custom)
            .customizable()
            .with_rating(4.8)
            .with_image("https://images.unsplash.com/photo-1486286701208-1d58e9338013?q=80&w=1600&auto=format&fit=crop")
            .with_tag("soccer")
            .with_tag("jersey")
            .with_tag("custom"),
        ];

        let deals = vec![
            BulkDeal::new("bd-100", "100 T‑Shirts", Money::new(38_900), "$3.89 each"),
            BulkDeal::new("bd-20j", "20 Jerseys", Money::new(34_000), "$17 each"),
            BulkDeal::new("bd-1000j", "1,000+ Jerseys", Money::new(500), "$5 each (unit)"),
        ];

        Self::new(products, deals).expect("demo catalog data is valid")
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All advertised bulk deals.
    pub fn deals(&self) -> &[BulkDeal] {
        &self.deals
    }

    /// Look up a product by ID.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The products featured on the home page.
    pub fn featured(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_COUNT)]
    }

    /// Products listed under a category, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}
