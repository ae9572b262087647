//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// `discounted_price()` never exceeds `price` because `discount_percentage`
/// is clamped to 0..=100 when it is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Base (list) price.
    pub price: Money,
    /// Whole-number markdown, if the product is on sale.
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    /// Primary image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category label, stored as entered (e.g., "t-shirts").
    pub category: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub reviews_count: u32,
    /// Size options.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Color options.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Shown under "New Arrivals".
    #[serde(default)]
    pub is_new_arrival: bool,
    /// Shown under "Top Selling".
    #[serde(default)]
    pub is_top_selling: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with no options or flags.
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: None,
            price,
            discount_percentage: None,
            image_url: None,
            category: category.into(),
            rating: 0.0,
            reviews_count: 0,
            sizes: Vec::new(),
            colors: Vec::new(),
            is_new_arrival: false,
            is_top_selling: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ProductId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percentage = Some(percent.min(100));
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.reviews_count = reviews_count;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new_arrival = true;
        self
    }

    pub fn top_selling(mut self) -> Self {
        self.is_top_selling = true;
        self
    }

    /// Check if the product carries a markdown.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage.is_some()
    }

    /// The markdown actually applied, clamped to 0..=100.
    pub fn effective_discount(&self) -> u8 {
        self.discount_percentage.map(|p| p.min(100)).unwrap_or(0)
    }

    /// Per-unit markdown amount.
    pub fn unit_discount(&self) -> Money {
        match self.discount_percentage {
            Some(_) => self.price.percentage(self.effective_discount()),
            None => Money::zero(),
        }
    }

    /// Unit price after markdown: `price * (1 - pct / 100)`.
    pub fn discounted_price(&self) -> Money {
        self.price - self.unit_discount()
    }

    /// Check if `size` is one of the size options.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if `color` is one of the color options.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discounted_price() {
        let p = Product::new("Tee", "t-shirts", Money::from_units(100)).with_discount(20);
        assert_eq!(p.discounted_price().amount(), dec!(80));
        assert_eq!(p.unit_discount().amount(), dec!(20));
        assert!(p.is_on_sale());
    }

    #[test]
    fn test_price_without_discount() {
        let p = Product::new("Jeans", "jeans", Money::new(dec!(59.90)));
        assert_eq!(p.discounted_price(), p.price);
        assert!(p.unit_discount().is_zero());
        assert!(!p.is_on_sale());
    }

    #[test]
    fn test_discount_is_clamped_when_applied() {
        let mut p = Product::new("Hoodie", "hoodie", Money::from_units(40));
        p.discount_percentage = Some(150);
        assert_eq!(p.effective_discount(), 100);
        assert!(p.discounted_price().is_zero());
        assert!(p.discounted_price() <= p.price);
    }

    #[test]
    fn test_options() {
        let p = Product::new("Shirt", "shirts", Money::from_units(30))
            .with_sizes(["Small", "Large"])
            .with_colors(["Black"]);
        assert!(p.offers_size("Large"));
        assert!(!p.offers_size("Medium"));
        assert!(p.offers_color("Black"));
        assert!(!p.offers_color("black"));
    }

    #[test]
    fn test_matches_text() {
        let p = Product::new("Vertical Striped Shirt", "shirts", Money::from_units(30))
            .with_description("Soft cotton");
        assert!(p.matches_text("striped"));
        assert!(p.matches_text("cotton"));
        assert!(!p.matches_text("denim"));
    }
}
