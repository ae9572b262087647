//! Storage backends for Shopind.
//!
//! [`MemoryStore`] implements [`shop_commerce::store::CommerceStore`] over
//! an in-memory [`Snapshot`], which can be loaded from and saved to a JSON
//! file.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//! use shop_store::MemoryStore;
//!
//! let store = MemoryStore::load("data/shop.json")?;
//! let shop = Storefront::new(store, PricingConfig::default());
//! let shirts = shop.browse(&FilterParams::from_pairs([("category", "shirts")]))?;
//! ```

mod error;
mod memory;
mod snapshot;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;
