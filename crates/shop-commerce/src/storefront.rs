//! Storefront orchestration.
//!
//! [`Storefront`] wires the pure catalog and pricing logic to an injected
//! [`CommerceStore`]. It owns no state besides the store handle and the
//! pricing configuration.

use crate::cart::{price_cart, Cart, CartLine, CartSummary, PricingConfig};
use crate::catalog::{Product, ProductDraft, RatingSummary, Review, ReviewDraft};
use crate::error::CommerceError;
use crate::ids::{LineItemId, OrderId, ProductId, UserId};
use crate::orders::{DashboardStats, OrderStatus};
use crate::search::{
    search_products, sort_products, CatalogQuery, FilterCriteria, FilterParams, Listing, SortKey,
};
use crate::store::{CommerceStore, Predicate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Products per home page section.
pub const HOME_SECTION_LIMIT: usize = 4;

/// Related products shown on a product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// The two product rows on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSections {
    pub new_arrivals: Vec<Product>,
    pub top_selling: Vec<Product>,
}

/// Everything the product page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    /// Newest first.
    pub reviews: Vec<Review>,
    pub rating: RatingSummary,
    pub related: Vec<Product>,
}

/// A cart line joined with its current product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    pub line: CartLine,
    pub product: Product,
}

/// A priced cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    /// Newest line first.
    pub entries: Vec<CartEntry>,
    pub summary: CartSummary,
}

/// Storefront operations over a [`CommerceStore`].
pub struct Storefront<S> {
    store: S,
    pricing: PricingConfig,
}

impl<S> Storefront<S>
where
    S: CommerceStore,
    CommerceError: From<S::Error>,
{
    pub fn new(store: S, pricing: PricingConfig) -> Self {
        Self { store, pricing }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse listing parameters and run the catalog query.
    pub fn browse(&self, params: &FilterParams) -> Result<Vec<Product>, CommerceError> {
        let criteria = FilterCriteria::parse(params)?;
        self.browse_criteria(&criteria)
    }

    /// Run the catalog query for already parsed criteria.
    pub fn browse_criteria(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, CommerceError> {
        if criteria.has_empty_price_range() {
            debug!(min = ?criteria.min_price, max = ?criteria.max_price, "inverted price range");
            return Ok(Vec::new());
        }

        let predicates = criteria.store_predicates();
        let candidates = self.store.query_products(&predicates)?;
        let fetched = candidates.len();
        let products = CatalogQuery::new(criteria.clone()).execute(candidates);

        debug!(
            pushed_down = predicates.len(),
            fetched,
            matched = products.len(),
            sort = criteria.sort.as_str(),
            "catalog query"
        );
        Ok(products)
    }

    /// One display page of a listing.
    pub fn browse_page(
        &self,
        params: &FilterParams,
        page: usize,
        per_page: usize,
    ) -> Result<Listing, CommerceError> {
        let criteria = FilterCriteria::parse(params)?;
        let products = self.browse_criteria(&criteria)?;
        Ok(Listing::paginate(criteria, products, page, per_page))
    }

    /// Substring search over names and descriptions, newest first.
    pub fn search(&self, query: &str) -> Result<Vec<Product>, CommerceError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self
            .store
            .query_products(&[Predicate::TextContains(query.to_string())])?;
        let products = search_products(query, candidates);
        debug!(query, matched = products.len(), "text search");
        Ok(products)
    }

    pub fn home(&self) -> Result<HomeSections, CommerceError> {
        let mut new_arrivals = self.store.query_products(&[Predicate::NewArrival])?;
        sort_products(&mut new_arrivals, SortKey::Newest);
        new_arrivals.truncate(HOME_SECTION_LIMIT);

        let mut top_selling = self.store.query_products(&[Predicate::TopSelling])?;
        top_selling.sort_by(|a, b| {
            b.reviews_count
                .cmp(&a.reviews_count)
                .then_with(|| a.id.cmp(&b.id))
        });
        top_selling.truncate(HOME_SECTION_LIMIT);

        Ok(HomeSections {
            new_arrivals,
            top_selling,
        })
    }

    pub fn product_detail(&self, id: &ProductId) -> Result<ProductDetail, CommerceError> {
        let product = self
            .store
            .product(id)?
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

        let mut reviews = self.store.reviews(id)?;
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        let rating = RatingSummary::from_reviews(&reviews);

        let mut related = self.store.query_products(&[
            Predicate::CategoryEq(product.category.clone()),
            Predicate::IdNot(product.id.clone()),
        ])?;
        sort_products(&mut related, SortKey::Newest);
        related.truncate(RELATED_PRODUCTS_LIMIT);

        Ok(ProductDetail {
            product,
            reviews,
            rating,
            related,
        })
    }

    /// The user's cart priced at current catalog prices.
    ///
    /// Lines whose product no longer exists are left out of the summary.
    pub fn cart(&self, user_id: &UserId) -> Result<CartView, CommerceError> {
        let cart = self.load_cart(user_id)?;

        let mut entries = Vec::with_capacity(cart.lines().len());
        for line in cart.lines() {
            match self.store.product(&line.product_id)? {
                Some(product) => entries.push(CartEntry {
                    line: line.clone(),
                    product,
                }),
                None => warn!(
                    line_id = %line.id,
                    product_id = %line.product_id,
                    "cart line references a missing product"
                ),
            }
        }

        let summary = price_cart(
            entries.iter().map(|e| (&e.line, &e.product)),
            &self.pricing,
        );
        debug!(
            user_id = %user_id,
            lines = summary.lines.len(),
            subtotal = %summary.subtotal,
            total = %summary.grand_total,
            "priced cart"
        );

        Ok(CartView { entries, summary })
    }

    /// Add a selection, merging into an existing line for the same selection.
    pub fn add_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
        size: &str,
        color: &str,
    ) -> Result<CartLine, CommerceError> {
        let product = self
            .store
            .product(product_id)?
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;

        let mut cart = self.load_cart(user_id)?;
        let line = cart.add_item(&product, quantity, size, color)?.clone();
        self.store.save_cart_line(line.clone())?;

        info!(
            user_id = %user_id,
            product_id = %product_id,
            quantity = line.quantity,
            "added to cart"
        );
        Ok(line)
    }

    /// Set a line's quantity; zero removes it.
    pub fn update_cart_quantity(
        &self,
        user_id: &UserId,
        line_id: &LineItemId,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        let mut cart = self.load_cart(user_id)?;
        if !cart.update_quantity(line_id, quantity)? {
            return Err(CommerceError::ItemNotInCart(line_id.to_string()));
        }

        match cart.get_line(line_id) {
            Some(line) => self.store.save_cart_line(line.clone())?,
            None => {
                self.store.delete_cart_line(line_id)?;
            }
        }
        Ok(())
    }

    pub fn remove_from_cart(
        &self,
        user_id: &UserId,
        line_id: &LineItemId,
    ) -> Result<(), CommerceError> {
        let mut cart = self.load_cart(user_id)?;
        if !cart.remove_item(line_id) {
            return Err(CommerceError::ItemNotInCart(line_id.to_string()));
        }
        self.store.delete_cart_line(line_id)?;
        Ok(())
    }

    /// Empty the user's cart, e.g. once checkout completes.
    pub fn clear_cart(&self, user_id: &UserId) -> Result<usize, CommerceError> {
        let removed = self.store.clear_cart(user_id)?;
        info!(user_id = %user_id, removed, "cleared cart");
        Ok(removed)
    }

    pub fn submit_review(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        draft: ReviewDraft,
        author_name: Option<String>,
    ) -> Result<Review, CommerceError> {
        if self.store.product(product_id)?.is_none() {
            return Err(CommerceError::ProductNotFound(product_id.to_string()));
        }

        let review = draft.into_review(product_id.clone(), user_id.clone(), author_name)?;
        self.store.insert_review(review.clone())?;
        info!(product_id = %product_id, rating = review.rating, "review submitted");
        Ok(review)
    }

    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, CommerceError> {
        let product = draft.into_product()?;
        self.store.insert_product(product.clone())?;
        info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub fn delete_product(&self, id: &ProductId) -> Result<(), CommerceError> {
        if !self.store.delete_product(id)? {
            return Err(CommerceError::ProductNotFound(id.to_string()));
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn dashboard(&self) -> Result<DashboardStats, CommerceError> {
        let total_products = self.store.count_products()?;
        let orders = self.store.orders()?;
        Ok(DashboardStats::compute(total_products, orders))
    }

    pub fn set_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), CommerceError> {
        if !self.store.set_order_status(id, status)? {
            return Err(CommerceError::OrderNotFound(id.to_string()));
        }
        info!(order_id = %id, status = status.as_str(), "order status updated");
        Ok(())
    }

    fn load_cart(&self, user_id: &UserId) -> Result<Cart, CommerceError> {
        let lines = self.store.cart_lines(user_id)?;
        Ok(Cart::from_lines(user_id.clone(), lines))
    }
}
