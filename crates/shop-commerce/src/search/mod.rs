//! Catalog search module.
//!
//! Contains listing filter criteria, sorting, text search, and pagination.

mod filter;
mod query;
mod results;

pub use filter::{FilterCriteria, FilterParams};
pub use query::{search_products, sort_products, CatalogQuery, SortKey};
pub use results::{Listing, Pagination};
