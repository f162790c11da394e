//! Cart, line, and variant types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Customization attributes attached to a cart line.
///
/// Attributes live in a sorted map, so equal selections compare equal
/// regardless of the order they were entered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Variant(BTreeMap<String, String>);

impl Variant {
    /// An empty variant (no customization).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Check if the variant carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One-line display summary (e.g., "color: Crimson, size: M").
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A line in the shopping cart.
///
/// Lines carry no price: pricing always reads the catalog at the moment
/// it is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Customization attributes, empty for off-the-shelf items.
    pub variant: Variant,
}

impl CartLine {
    /// Price this line against the catalog.
    ///
    /// Returns `None` when the product no longer resolves; such a line
    /// contributes nothing to cart totals.
    pub fn total(&self, catalog: &Catalog) -> Option<Money> {
        catalog
            .find(&self.product_id)
            .map(|p| p.price * self.quantity as i64)
    }
}

/// A shopping cart.
///
/// Lines are keyed by product and variant: adding the same selection
/// twice merges quantities instead of appending a second line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// The quantity is clamped to at least 1. If a line with the same
    /// product and variant already exists the quantities merge, otherwise
    /// a new line is appended. Returns the index of the affected line.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
        variant: Variant,
    ) -> Result<usize, StoreError> {
        if catalog.find(&product_id).is_none() {
            return Err(StoreError::UnknownProduct(product_id.to_string()));
        }
        let quantity = quantity.max(1);

        if let Some(index) = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id && l.variant == variant)
        {
            let line = &mut self.lines[index];
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(index);
        }

        self.lines.push(CartLine {
            product_id,
            quantity,
            variant,
        });
        Ok(self.lines.len() - 1)
    }

    /// Remove a line by index.
    ///
    /// Out-of-range indices are a no-op; the return value reports whether
    /// a line was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.lines.len() {
            self.lines.remove(index);
            true
        } else {
            false
        }
    }

    /// Set a line's quantity, clamped to at least 1.
    ///
    /// Out-of-range indices are a no-op; the return value reports whether
    /// a line was updated.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by index.
    pub fn line(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count (sum of quantities), as shown on the cart badge.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculate the full pricing breakdown against the catalog.
    ///
    /// Lines whose product no longer resolves are skipped and contribute
    /// nothing to the totals.
    pub fn pricing(&self, catalog: &Catalog) -> CartPricing {
        let lines: Vec<LinePricing> = self
            .lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                catalog.find(&line.product_id).map(|product| LinePricing {
                    line: index,
                    unit_price: product.price,
                    quantity: line.quantity,
                    total: product.price * line.quantity as i64,
                })
            })
            .collect();

        let subtotal: Money = lines.iter().map(|l| l.total).sum();
        let shipping_total = Money::zero();

        CartPricing {
            subtotal,
            shipping_total,
            grand_total: subtotal + shipping_total,
            lines,
        }
    }

    /// Grand total for the cart.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.pricing(catalog).grand_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    fn catalog() -> Catalog {
        Catalog::demo()
    }

    #[test]
    fn test_add_new_line() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let index = cart
            .add(&catalog, ProductId::new("sr-1001"), 2, Variant::none())
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let err = cart
            .add(&catalog, ProductId::new("zz-9999"), 1, Variant::none())
            .unwrap_err();

        assert!(matches!(err, StoreError::UnknownProduct(id) if id == "zz-9999"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_same_selection_merges() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let variant = Variant::none().with("size", "M").with("color", "Black");

        cart.add(&catalog, ProductId::new("ts-2001"), 1, variant.clone())
            .unwrap();
        let index = cart
            .add(&catalog, ProductId::new("ts-2001"), 2, variant)
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let first = Variant::none().with("size", "M").with("color", "Black");
        let second = Variant::none().with("color", "Black").with("size", "M");

        cart.add(&catalog, ProductId::new("ts-2001"), 1, first).unwrap();
        cart.add(&catalog, ProductId::new("ts-2001"), 1, second).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_different_variants_stay_separate() {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add(
            &catalog,
            ProductId::new("ts-2001"),
            1,
            Variant::none().with("size", "M"),
        )
        .unwrap();
        let index = cart
            .add(
                &catalog,
                ProductId::new("ts-2001"),
                1,
                Variant::none().with("size", "L"),
            )
            .unwrap();

        assert_eq!(index, 1);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_zero_quantity_clamps_to_one() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new("sr-1001"), 0, Variant::none())
            .unwrap();
        assert_eq!(cart.count(), 1);

        cart.set_quantity(0, 0);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_reports_out_of_range() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new("sr-1001"), 1, Variant::none())
            .unwrap();

        assert!(!cart.remove(5));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new("sr-1001"), 1, Variant::none())
            .unwrap();

        assert!(cart.set_quantity(0, 7));
        assert_eq!(cart.count(), 7);
        assert!(!cart.set_quantity(3, 7));
    }

    #[test]
    fn test_pricing() {
        let catalog = catalog();
        let mut cart = Cart::new();
        // 3 jerseys at $24 plus 1 saree at $69.
        cart.add(&catalog, ProductId::new("ts-2001"), 3, Variant::none())
            .unwrap();
        cart.add(&catalog, ProductId::new("sr-1001"), 1, Variant::none())
            .unwrap();

        let pricing = cart.pricing(&catalog);
        assert_eq!(pricing.subtotal, Money::new(14_100));
        assert!(pricing.shipping_total.is_zero());
        assert_eq!(pricing.grand_total, Money::new(14_100));
        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.lines[0].total, Money::new(7_200));
    }

    #[test]
    fn test_missing_product_contributes_nothing() {
        let full = catalog();
        let mut cart = Cart::new();
        cart.add(&full, ProductId::new("sr-1001"), 2, Variant::none())
            .unwrap();
        cart.add(&full, ProductId::new("ts-2001"), 1, Variant::none())
            .unwrap();

        // Price against a catalog that no longer carries the saree.
        let smaller = Catalog::new(
            vec![Product::new(
                "ts-2001",
                "Custom Team Jersey",
                Money::new(2_400),
                Category::Sports,
            )],
            Vec::new(),
        )
        .unwrap();

        assert!(cart.lines()[0].total(&smaller).is_none());
        let pricing = cart.pricing(&smaller);
        assert_eq!(pricing.lines.len(), 1);
        assert_eq!(pricing.grand_total, Money::new(2_400));
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new("sr-1001"), 2, Variant::none())
            .unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }
}
