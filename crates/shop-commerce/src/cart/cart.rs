//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// One product, size and color selection in a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub id: LineItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartLine {
    /// Check if this line holds the given selection.
    pub fn is_selection(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product_id == product_id && self.size == size && self.color == color
    }
}

/// A user's cart.
///
/// Holds at most one line per (product, size, color); adding the same
/// selection again increments that line's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub user_id: UserId,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            lines: Vec::new(),
        }
    }

    /// Rebuild a cart from stored lines, newest first.
    ///
    /// Lines belonging to other users are dropped.
    pub fn from_lines(user_id: UserId, lines: Vec<CartLine>) -> Self {
        let mut lines: Vec<CartLine> = lines
            .into_iter()
            .filter(|l| l.user_id == user_id)
            .collect();
        lines.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Self { user_id, lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add a selection to the cart.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The product does not offer `size` or `color`
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
        color: &str,
    ) -> Result<&CartLine, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !product.offers_size(size) {
            return Err(CommerceError::UnavailableOption {
                product_id: product.id.to_string(),
                option: "size",
                value: size.to_string(),
            });
        }
        if !product.offers_color(color) {
            return Err(CommerceError::UnavailableOption {
                product_id: product.id.to_string(),
                option: "color",
                value: color.to_string(),
            });
        }

        let now = Utc::now();

        if let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.is_selection(&product.id, size, color))
        {
            let line = &mut self.lines[idx];
            let new_quantity = line.quantity as u64 + quantity as u64;
            if new_quantity > MAX_QUANTITY_PER_ITEM as u64 {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            line.quantity = new_quantity as u32;
            line.updated_at = now;
            return Ok(&self.lines[idx]);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity as u64,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.lines.insert(
            0,
            CartLine {
                id: LineItemId::generate(),
                user_id: self.user_id.clone(),
                product_id: product.id.clone(),
                quantity,
                size: size.to_string(),
                color: color.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(&self.lines[0])
    }

    /// Set a line's quantity. A quantity of zero removes the line.
    ///
    /// Returns `false` when the line is not in this cart.
    pub fn update_quantity(
        &mut self,
        line_id: &LineItemId,
        quantity: u32,
    ) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove_item(line_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity as u64,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.lines.iter_mut().find(|l| &l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                line.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, line_id: &LineItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() < len_before
    }

    /// Clear all lines, e.g. once checkout completes.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn get_line(&self, line_id: &LineItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn shirt() -> Product {
        Product::new("Checkered Shirt", "shirts", Money::from_units(180))
            .with_id("p-shirt")
            .with_sizes(["Medium", "Large"])
            .with_colors(["Red", "Blue"])
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new(UserId::new("u-1"));
        let line = cart.add_item(&shirt(), 2, "Large", "Red").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.user_id.as_str(), "u-1");
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_duplicate_selection_increments() {
        let mut cart = Cart::new(UserId::new("u-1"));
        let first = cart.add_item(&shirt(), 1, "Large", "Red").unwrap().id.clone();
        let second = cart.add_item(&shirt(), 3, "Large", "Red").unwrap().id.clone();
        assert_eq!(first, second);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_different_selection_is_new_line() {
        let mut cart = Cart::new(UserId::new("u-1"));
        cart.add_item(&shirt(), 1, "Large", "Red").unwrap();
        cart.add_item(&shirt(), 1, "Large", "Blue").unwrap();
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].color, "Blue");
    }

    #[test]
    fn test_rejects_unoffered_options() {
        let mut cart = Cart::new(UserId::new("u-1"));
        let err = cart.add_item(&shirt(), 1, "Small", "Red").unwrap_err();
        assert!(matches!(err, CommerceError::UnavailableOption { option: "size", .. }));
        let err = cart.add_item(&shirt(), 1, "Large", "Green").unwrap_err();
        assert!(matches!(err, CommerceError::UnavailableOption { option: "color", .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejects_zero_and_excess_quantity() {
        let mut cart = Cart::new(UserId::new("u-1"));
        assert_eq!(
            cart.add_item(&shirt(), 0, "Large", "Red").unwrap_err(),
            CommerceError::InvalidQuantity(0)
        );
        cart.add_item(&shirt(), MAX_QUANTITY_PER_ITEM, "Large", "Red").unwrap();
        assert!(matches!(
            cart.add_item(&shirt(), 1, "Large", "Red"),
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
        assert_eq!(cart.lines()[0].quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new(UserId::new("u-1"));
        let id = cart.add_item(&shirt(), 1, "Medium", "Blue").unwrap().id.clone();

        assert!(cart.update_quantity(&id, 5).unwrap());
        assert_eq!(cart.get_line(&id).unwrap().quantity, 5);

        assert!(!cart.update_quantity(&LineItemId::new("missing"), 2).unwrap());

        assert!(cart.update_quantity(&id, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_lines_filters_and_orders() {
        let mut cart = Cart::new(UserId::new("u-1"));
        cart.add_item(&shirt(), 1, "Medium", "Blue").unwrap();
        let mut lines = cart.lines().to_vec();

        let mut foreign = lines[0].clone();
        foreign.id = LineItemId::new("other");
        foreign.user_id = UserId::new("u-2");
        lines.push(foreign);

        let rebuilt = Cart::from_lines(UserId::new("u-1"), lines);
        assert_eq!(rebuilt.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(UserId::new("u-1"));
        cart.add_item(&shirt(), 1, "Medium", "Blue").unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
