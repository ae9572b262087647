//! Catalog query execution and sorting.

use crate::catalog::Product;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
}

impl SortKey {
    /// Parse a sort key as sent by the shop page.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Some(SortKey::Newest),
            "price-asc" | "price-ascending" => Some(SortKey::PriceAsc),
            "price-desc" | "price-descending" => Some(SortKey::PriceDesc),
            "rating" | "rating-desc" | "rating-descending" => Some(SortKey::RatingDesc),
            _ => None,
        }
    }

    /// The canonical query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Most Recent",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
        }
    }

    /// Total order for this key. Equal primary keys fall back to id ascending.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Applies [`FilterCriteria`] to a product collection.
///
/// Filtering is conjunctive across dimensions; sorting runs once, afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    criteria: FilterCriteria,
}

impl CatalogQuery {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    /// Filter and order `products`. Nothing matching is an empty result.
    pub fn execute(&self, products: impl IntoIterator<Item = Product>) -> Vec<Product> {
        if self.criteria.has_empty_price_range() {
            return Vec::new();
        }

        let mut matched: Vec<Product> = products
            .into_iter()
            .filter(|p| self.criteria.matches(p))
            .collect();
        sort_products(&mut matched, self.criteria.sort);
        matched
    }
}

/// Sort in place by `key`.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    products.sort_by(|a, b| key.compare(a, b));
}

/// Case-insensitive substring search over name and description, newest first.
///
/// A blank query matches nothing.
pub fn search_products(query: &str, products: impl IntoIterator<Item = Product>) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<Product> = products
        .into_iter()
        .filter(|p| p.matches_text(&needle))
        .collect();
    sort_products(&mut matched, SortKey::Newest);
    matched
}
