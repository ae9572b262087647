//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// A listing parameter could not be parsed into filter criteria.
    #[error("Invalid filter `{param}`: {reason}")]
    InvalidFilter { param: String, reason: String },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart line not found for this user.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u64, u32),

    /// The product does not offer the selected size or color.
    #[error("Product {product_id} does not offer {option} `{value}`")]
    UnavailableOption {
        product_id: String,
        option: &'static str,
        value: String,
    },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage collaborator failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl CommerceError {
    /// Shorthand for an [`CommerceError::InvalidFilter`].
    pub fn invalid_filter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        CommerceError::InvalidFilter {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller may recover by dropping the offending filter.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, CommerceError::InvalidFilter { .. })
    }
}
