//! Admin product drafts.
//!
//! The admin form submits every field as text. A [`ProductDraft`] holds that
//! raw input and validates it into a [`Product`].

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest list price, in whole units, the admin form accepts.
pub const MAX_PRODUCT_PRICE: i64 = 1_000_000_000;

/// Raw product form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    /// Comma-separated, e.g. "Small, Medium, Large".
    pub sizes: String,
    /// Comma-separated, e.g. "Black, White".
    pub colors: String,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub is_top_selling: bool,
}

impl ProductDraft {
    /// Validate the draft and build a new product.
    pub fn into_product(self) -> Result<Product, CommerceError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CommerceError::ValidationError("name is required".to_string()));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(CommerceError::ValidationError(
                "category is required".to_string(),
            ));
        }

        let price: Money = self.price.parse().map_err(|_| {
            CommerceError::ValidationError(format!("price `{}` is not a number", self.price))
        })?;
        if !price.is_positive() {
            return Err(CommerceError::ValidationError(
                "price must be positive".to_string(),
            ));
        }
        if price > Money::from_units(MAX_PRODUCT_PRICE) {
            return Err(CommerceError::ValidationError(format!(
                "price must be at most {}",
                MAX_PRODUCT_PRICE
            )));
        }

        let discount = match self.discount.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let pct: u8 = raw.parse().map_err(|_| {
                    CommerceError::ValidationError(format!(
                        "discount `{}` must be a whole number from 0 to 100",
                        raw
                    ))
                })?;
                if pct > 100 {
                    return Err(CommerceError::ValidationError(format!(
                        "discount {} exceeds 100",
                        pct
                    )));
                }
                Some(pct)
            }
        };

        let sizes = split_list(&self.sizes);
        if sizes.is_empty() {
            return Err(CommerceError::ValidationError(
                "at least one size is required".to_string(),
            ));
        }
        let colors = split_list(&self.colors);
        if colors.is_empty() {
            return Err(CommerceError::ValidationError(
                "at least one color is required".to_string(),
            ));
        }

        let mut product = Product::new(name, category, price)
            .with_sizes(sizes)
            .with_colors(colors);
        product.discount_percentage = discount;
        product.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        product.image_url = self.image_url.filter(|u| !u.trim().is_empty());
        product.is_new_arrival = self.is_new_arrival;
        product.is_top_selling = self.is_top_selling;
        Ok(product)
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
