//! Product catalog module.
//!
//! Contains products, admin product drafts, and reviews.

mod draft;
mod product;
mod review;

pub(crate) use draft::split_list;
pub use draft::{ProductDraft, MAX_PRODUCT_PRICE};
pub use product::Product;
pub use review::{RatingSummary, Review, ReviewDraft};
