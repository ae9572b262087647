//! Shopping cart module.
//!
//! Contains cart lines and the cart pricing engine.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
pub use pricing::{price_cart, CartSummary, LinePricing, PricingConfig, DEFAULT_DELIVERY_FEE};
