//! Cart pricing calculations.
//!
//! Prices are read live from the paired products, not snapshotted when a
//! line was added. All accumulation is full precision; round only for display.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat delivery fee charged on any non-empty cart, in whole currency units.
pub const DEFAULT_DELIVERY_FEE: i64 = 15;

/// Pricing knobs that come from configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Charged when the subtotal is above zero.
    pub delivery_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Money::from_units(DEFAULT_DELIVERY_FEE),
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown, in input order.
    pub lines: Vec<LinePricing>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of discounted line totals.
    pub subtotal: Money,
    /// Sum of markdowns across all lines.
    pub discount_total: Money,
    pub delivery_fee: Money,
    /// subtotal + delivery_fee.
    pub grand_total: Money,
}

impl CartSummary {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            item_count: 0,
            subtotal: Money::zero(),
            discount_total: Money::zero(),
            delivery_fee: Money::zero(),
            grand_total: Money::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        self.discount_total.is_positive()
    }

    /// Subtotal at list prices, before markdowns.
    pub fn original_subtotal(&self) -> Money {
        self.subtotal + self.discount_total
    }

    /// Weighted markdown across the whole cart, as a percentage of the
    /// list-price subtotal.
    pub fn discount_percentage(&self) -> Decimal {
        let original = self.original_subtotal().amount();
        if original.is_zero() {
            return Decimal::ZERO;
        }
        self.discount_total.amount() / original * Decimal::ONE_HUNDRED
    }
}

impl Default for CartSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub line_id: LineItemId,
    pub product_id: ProductId,
    pub quantity: u32,
    /// List price per unit.
    pub unit_price: Money,
    /// Price per unit after markdown.
    pub discounted_unit_price: Money,
    /// Markdown for the whole line.
    pub discount_amount: Money,
    /// discounted_unit_price * quantity.
    pub total: Money,
}

impl LinePricing {
    pub fn new(line: &CartLine, product: &Product) -> Self {
        let discounted_unit_price = product.discounted_price();
        Self {
            line_id: line.id.clone(),
            product_id: product.id.clone(),
            quantity: line.quantity,
            unit_price: product.price,
            discounted_unit_price,
            discount_amount: product.unit_discount() * line.quantity,
            total: discounted_unit_price * line.quantity,
        }
    }
}

/// Price a cart from (line, product) pairs.
///
/// Pure: the same input always yields the same summary. An empty input
/// yields an all-zero summary with no delivery fee.
pub fn price_cart<'a, I>(lines: I, config: &PricingConfig) -> CartSummary
where
    I: IntoIterator<Item = (&'a CartLine, &'a Product)>,
{
    let lines: Vec<LinePricing> = lines
        .into_iter()
        .map(|(line, product)| LinePricing::new(line, product))
        .collect();

    let item_count = lines.iter().map(|l| l.quantity as u64).sum();
    let subtotal: Money = lines.iter().map(|l| l.total).sum();
    let discount_total: Money = lines.iter().map(|l| l.discount_amount).sum();
    let delivery_fee = if subtotal.is_positive() {
        config.delivery_fee
    } else {
        Money::zero()
    };

    CartSummary {
        lines,
        item_count,
        subtotal,
        discount_total,
        delivery_fee,
        grand_total: subtotal + delivery_fee,
    }
}
