//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchandising category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Sports,
    Custom,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
            Category::Sports => "sports",
            Category::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Sports => "Sports",
            Category::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "men" => Some(Category::Men),
            "women" => Some(Category::Women),
            "sports" => Some(Category::Sports),
            "custom" => Some(Category::Custom),
            _ => None,
        }
    }
}

/// Sourcing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Stocked boutique item, sold as-is.
    #[default]
    Boutique,
    /// Made-to-order item.
    Custom,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Boutique => "boutique",
            ProductKind::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductKind::Boutique => "Boutique",
            ProductKind::Custom => "Custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "boutique" => Some(ProductKind::Boutique),
            "custom" => Some(ProductKind::Custom),
            _ => None,
        }
    }
}

/// Opaque reference to a displayable image (a URL or a captured upload).
///
/// The core never interprets the contents; display layers hand it to
/// whatever renders images.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a reference from a string.
    pub fn new(image: impl Into<String>) -> Self {
        Self(image.into())
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A product in the catalog.
///
/// Products are immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Merchandising category.
    pub category: Category,
    /// Sourcing classification.
    #[serde(rename = "type")]
    pub kind: ProductKind,
    /// Whether the customizer can target this product.
    pub customizable: bool,
    /// Average review rating on a 0 to 5 scale.
    pub rating: f64,
    /// Primary product image.
    pub image: ImageRef,
    /// Tags for filtering/search.
    pub tags: Vec<String>,
}

impl Product {
    /// Create a new boutique product with no rating, image, or tags.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category,
            kind: ProductKind::Boutique,
            customizable: false,
            rating: 0.0,
            image: ImageRef::new(""),
            tags: Vec::new(),
        }
    }

    /// Set the sourcing classification.
    pub fn with_kind(mut self, kind: ProductKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the product as a customizer target.
    pub fn customizable(mut self) -> Self {
        self.customizable = true;
        self
    }

    /// Set the review rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the product image.
    pub fn with_image(mut self, image: impl Into<ImageRef>) -> Self {
        self.image = image.into();
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new("sr-1001", "Silk Saree", Money::new(6_900), Category::Women)
            .with_rating(4.7)
            .with_image("https://example.com/saree.jpg")
            .with_tag("saree")
            .with_tag("party-wear");

        assert_eq!(product.id.as_str(), "sr-1001");
        assert_eq!(product.kind, ProductKind::Boutique);
        assert!(!product.customizable);
        assert_eq!(product.tags, vec!["saree", "party-wear"]);
    }

    #[test]
    fn test_customizable_product() {
        let product = Product::new("ts-2001", "Custom Jersey", Money::new(2_400), Category::Sports)
            .with_kind(ProductKind::Custom)
            .customizable();

        assert_eq!(product.kind, ProductKind::Custom);
        assert!(product.customizable);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("Women"), Some(Category::Women));
        assert_eq!(Category::from_str("sports"), Some(Category::Sports));
        assert_eq!(Category::from_str("unknown"), None);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let product = Product::new("ts-2002", "Custom Polo", Money::new(1_900), Category::Custom)
            .with_kind(ProductKind::Custom);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "Custom");
        assert_eq!(json["category"], "Custom");
    }
}
