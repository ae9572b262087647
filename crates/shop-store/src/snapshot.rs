//! Serializable store contents.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use shop_commerce::prelude::*;
use std::path::Path;

/// Every record the store holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub cart_lines: Vec<CartLine>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::from_json(r#"{"products": []}"#).unwrap();
        assert!(snapshot.cart_lines.is_empty());
        assert!(snapshot.orders.is_empty());
    }

    #[test]
    fn test_parse_product_record() {
        let json = r#"{
            "products": [{
                "id": "p-1",
                "name": "Gradient Graphic T-shirt",
                "price": "145",
                "discount_percentage": 20,
                "category": "t-shirts",
                "sizes": ["Small", "Medium"],
                "colors": ["white"],
                "created_at": "2025-03-01T10:00:00Z"
            }]
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        let product = &snapshot.products[0];
        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.price, Money::from_units(145));
        assert_eq!(product.discount_percentage, Some(20));
        assert!(!product.is_new_arrival);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = Snapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load("/nonexistent/shop.json").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
