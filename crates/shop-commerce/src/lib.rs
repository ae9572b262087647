//! Storefront domain types and logic for Shopind.
//!
//! This crate holds the business core of the storefront:
//!
//! - **Catalog**: Products, admin product drafts, reviews
//! - **Search**: Filter criteria parsed from query parameters, sorting, text search, pagination
//! - **Cart**: Cart lines with merge-on-duplicate semantics and the pricing engine
//! - **Orders**: Order records and admin dashboard statistics
//! - **Storefront**: Orchestration over an injected [`store::CommerceStore`]
//!
//! Filtering, sorting and pricing are pure functions over materialized data;
//! all I/O goes through the store collaborator.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let params = FilterParams {
//!     category: Some("shirts".to_string()),
//!     sort: Some("price-asc".to_string()),
//!     ..Default::default()
//! };
//! let criteria = FilterCriteria::parse(&params)?;
//! let listing = CatalogQuery::new(criteria).execute(products);
//!
//! let summary = price_cart(lines.iter().map(|(l, p)| (l, p)), &PricingConfig::default());
//! println!("Total: {}", summary.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod search;
pub mod store;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Product, ProductDraft, RatingSummary, Review, ReviewDraft};

    // Search
    pub use crate::search::{
        search_products, CatalogQuery, FilterCriteria, FilterParams, Listing, Pagination, SortKey,
    };

    // Cart
    pub use crate::cart::{
        price_cart, Cart, CartLine, CartSummary, LinePricing, PricingConfig,
        MAX_QUANTITY_PER_ITEM,
    };

    // Orders
    pub use crate::orders::{DashboardStats, Order, OrderStatus};

    // Storage and orchestration
    pub use crate::store::{CommerceStore, Predicate};
    pub use crate::storefront::{CartEntry, CartView, HomeSections, ProductDetail, Storefront};
}
