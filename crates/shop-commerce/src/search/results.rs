//! Listing pages and pagination.
//!
//! Pagination slices an already filtered and ordered listing for display.
//! It never changes which products match or their order.

use crate::catalog::Product;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` are raised to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// The items of `all` that fall on this page.
    pub fn slice<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        let start = self.offset().min(all.len());
        let end = start.saturating_add(self.per_page).min(all.len());
        &all[start..end]
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = start
            .saturating_add(max_visible.saturating_sub(1))
            .min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset().saturating_add(1).min(self.total)
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 9, 0)
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Page heading derived from the criteria.
    pub title: String,
    pub criteria: FilterCriteria,
    /// Products on this page, in listing order.
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

impl Listing {
    /// Cut one page out of a full, ordered result.
    pub fn paginate(criteria: FilterCriteria, all: Vec<Product>, page: usize, per_page: usize) -> Self {
        let pagination = Pagination::new(page, per_page, all.len());
        let products = pagination.slice(&all).to_vec();
        Self {
            title: criteria.title(),
            criteria,
            products,
            pagination,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(0, 0, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert!(p.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_slice_past_the_end() {
        let items = [1, 2, 3];
        let p = Pagination::new(3, 2, items.len());
        assert!(p.slice(&items).is_empty());
        let p = Pagination::new(2, 2, items.len());
        assert_eq!(p.slice(&items), &[3]);
    }

    #[test]
    fn test_huge_page_is_empty() {
        let items = [1, 2, 3];
        let p = Pagination::new(usize::MAX / 2, 9, items.len());
        assert!(p.slice(&items).is_empty());
        assert_eq!(p.end_item(), 3);
        assert_eq!(p.start_item(), 3);

        let p = Pagination::new(usize::MAX, usize::MAX, items.len());
        assert!(p.slice(&items).is_empty());
        assert!(!p.has_next);
        assert_eq!(Pagination::new(usize::MAX, 1, 20).page_numbers(5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_listing_keeps_order() {
        let all: Vec<Product> = (0..5)
            .map(|i| Product::new(format!("P{}", i), "shirts", Money::from_units(10)).with_id(format!("p-{}", i)))
            .collect();
        let listing = Listing::paginate(FilterCriteria::new().with_category("shirts"), all, 2, 2);
        assert_eq!(listing.title, "Shirts");
        assert_eq!(listing.products[0].id.as_str(), "p-2");
        assert_eq!(listing.products[1].id.as_str(), "p-3");
        assert_eq!(listing.pagination.total, 5);
    }
}
