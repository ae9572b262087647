//! Storage collaborator interface.
//!
//! Persistence lives behind [`CommerceStore`], which the
//! [`Storefront`](crate::storefront::Storefront) receives explicitly. Product
//! reads accept simple [`Predicate`]s a backend can evaluate on its side;
//! the catalog query re-applies its full criteria afterwards, so a store that
//! ignores predicates still yields correct listings.

use crate::cart::CartLine;
use crate::catalog::{Product, Review};
use crate::ids::{LineItemId, OrderId, ProductId, UserId};
use crate::money::Money;
use crate::orders::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// A product predicate simple enough to push down to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Predicate {
    /// Exact category match.
    CategoryEq(String),
    NewArrival,
    TopSelling,
    /// Has a discount percentage.
    OnSale,
    PriceAtLeast(Money),
    PriceAtMost(Money),
    /// Case-insensitive substring in name or description.
    TextContains(String),
    /// Excludes one product.
    IdNot(ProductId),
}

impl Predicate {
    /// Evaluate against an in-memory product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::CategoryEq(category) => &product.category == category,
            Predicate::NewArrival => product.is_new_arrival,
            Predicate::TopSelling => product.is_top_selling,
            Predicate::OnSale => product.is_on_sale(),
            Predicate::PriceAtLeast(min) => product.price >= *min,
            Predicate::PriceAtMost(max) => product.price <= *max,
            Predicate::TextContains(text) => product.matches_text(&text.trim().to_lowercase()),
            Predicate::IdNot(id) => &product.id != id,
        }
    }
}

/// Check a product against every predicate.
pub fn matches_all(predicates: &[Predicate], product: &Product) -> bool {
    predicates.iter().all(|p| p.matches(product))
}

/// Persistence for products, carts, reviews and orders.
///
/// Methods take `&self`; implementations handle their own synchronization.
pub trait CommerceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Products satisfying every predicate, in no particular order.
    fn query_products(&self, predicates: &[Predicate]) -> Result<Vec<Product>, Self::Error>;

    fn product(&self, id: &ProductId) -> Result<Option<Product>, Self::Error>;

    fn insert_product(&self, product: Product) -> Result<(), Self::Error>;

    /// Returns `false` when there was nothing to delete.
    fn delete_product(&self, id: &ProductId) -> Result<bool, Self::Error>;

    fn count_products(&self) -> Result<usize, Self::Error>;

    fn cart_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, Self::Error>;

    /// Insert or replace a line by id.
    fn save_cart_line(&self, line: CartLine) -> Result<(), Self::Error>;

    fn delete_cart_line(&self, id: &LineItemId) -> Result<bool, Self::Error>;

    /// Delete every line of a user's cart, returning how many were removed.
    fn clear_cart(&self, user_id: &UserId) -> Result<usize, Self::Error>;

    fn reviews(&self, product_id: &ProductId) -> Result<Vec<Review>, Self::Error>;

    fn insert_review(&self, review: Review) -> Result<(), Self::Error>;

    fn orders(&self) -> Result<Vec<Order>, Self::Error>;

    /// Returns `false` when the order does not exist.
    fn set_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<bool, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jeans() -> Product {
        Product::new("Faded Skinny Jeans", "jeans", Money::from_units(210))
            .with_id("p-7")
            .with_discount(10)
    }

    #[test]
    fn test_predicates_match() {
        let p = jeans();
        assert!(Predicate::CategoryEq("jeans".to_string()).matches(&p));
        assert!(Predicate::OnSale.matches(&p));
        assert!(!Predicate::NewArrival.matches(&p));
        assert!(Predicate::PriceAtLeast(Money::from_units(210)).matches(&p));
        assert!(!Predicate::PriceAtMost(Money::from_units(200)).matches(&p));
        assert!(Predicate::TextContains("SKINNY".to_string()).matches(&p));
        assert!(!Predicate::IdNot(ProductId::new("p-7")).matches(&p));
    }

    #[test]
    fn test_matches_all() {
        let p = jeans();
        assert!(matches_all(&[], &p));
        assert!(!matches_all(&[Predicate::OnSale, Predicate::TopSelling], &p));
    }
}
