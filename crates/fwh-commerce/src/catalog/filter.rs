//! Product filtering.

use crate::catalog::{Catalog, Category, Product, ProductKind};
use serde::{Deserialize, Serialize};

/// Criteria for narrowing the product listing.
///
/// Criteria combine with AND. `None` selectors mean "All"; the default
/// criteria match every product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query matched against titles and tags.
    pub query: String,
    /// Category selector.
    pub category: Option<Category>,
    /// Sourcing selector.
    pub kind: Option<ProductKind>,
    /// Customizable selector.
    pub customizable: Option<bool>,
}

impl FilterCriteria {
    /// Criteria that match every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to a sourcing classification.
    pub fn with_kind(mut self, kind: ProductKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to customizable (or non-customizable) products.
    pub fn with_customizable(mut self, customizable: bool) -> Self {
        self.customizable = Some(customizable);
        self
    }

    /// Check a single product against the criteria.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(&self.normalized_query(), product)
    }

    /// Apply the criteria to a catalog, preserving catalog order.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let query = self.normalized_query();
        catalog
            .products()
            .iter()
            .filter(|p| self.matches_query(&query, p))
            .collect()
    }

    /// The query trimmed and lowercased for matching.
    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_query(&self, query: &str, product: &Product) -> bool {
        let query_ok = query.is_empty()
            || product.title.to_lowercase().contains(query)
            || product.tags.iter().any(|t| t.to_lowercase().contains(query));
        let category_ok = self.category.map_or(true, |c| product.category == c);
        let kind_ok = self.kind.map_or(true, |k| product.kind == k);
        let customizable_ok = self
            .customizable
            .map_or(true, |c| product.customizable == c);

        query_ok && category_ok && kind_ok && customizable_ok
    }
}
