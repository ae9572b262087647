//! Identifier newtypes.
//!
//! Every record is keyed by an opaque string. Wrapping each kind in its own
//! type keeps a cart line id from being passed where a product id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed identifier type.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// Ordered lexicographically so listings can break ties deterministically.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// A fresh, process-unique id.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product.
    ProductId
);
define_id!(
    /// One (product, size, color) line in a cart.
    LineItemId
);
define_id!(
    /// Account that owns carts, reviews and orders.
    UserId
);
define_id!(ReviewId);
define_id!(OrderId);

/// Generate a unique ID from the wall clock and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:04x}", timestamp, counter & 0xffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_generation() {
        let id1 = LineItemId::generate();
        let id2 = LineItemId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![ProductId::new("p-3"), ProductId::new("p-1"), ProductId::new("p-2")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "p-1");
        assert_eq!(ids[2].as_str(), "p-3");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = UserId::new("user-9");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-9\"");
    }
}
