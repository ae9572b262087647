//! In-memory store.

use crate::{Snapshot, StoreError};
use shop_commerce::prelude::*;
use shop_commerce::store::matches_all;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// A [`CommerceStore`] holding everything in memory.
///
/// Product predicates are evaluated in place. Use [`MemoryStore::load`] and
/// [`MemoryStore::save`] to persist the contents as a JSON snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
        }
    }

    /// Open a store from a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let snapshot = Snapshot::load(path)?;
        debug!(
            path = %path.display(),
            products = snapshot.products.len(),
            orders = snapshot.orders.len(),
            "loaded snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Write the current contents to a snapshot file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        self.read()?.save(path)?;
        debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>, StoreError> {
        self.data.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>, StoreError> {
        self.data.write().map_err(|_| StoreError::Poisoned)
    }
}

impl CommerceStore for MemoryStore {
    type Error = StoreError;

    fn query_products(&self, predicates: &[Predicate]) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .read()?
            .products
            .iter()
            .filter(|p| matches_all(predicates, p))
            .cloned()
            .collect())
    }

    fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.products.iter().find(|p| &p.id == id).cloned())
    }

    fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut data = self.write()?;
        match data.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => data.products.push(product),
        }
        Ok(())
    }

    fn delete_product(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut data = self.write()?;
        let before = data.products.len();
        data.products.retain(|p| &p.id != id);
        Ok(data.products.len() < before)
    }

    fn count_products(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.products.len())
    }

    fn cart_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, StoreError> {
        Ok(self
            .read()?
            .cart_lines
            .iter()
            .filter(|l| &l.user_id == user_id)
            .cloned()
            .collect())
    }

    fn save_cart_line(&self, line: CartLine) -> Result<(), StoreError> {
        let mut data = self.write()?;
        match data.cart_lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => *existing = line,
            None => data.cart_lines.push(line),
        }
        Ok(())
    }

    fn delete_cart_line(&self, id: &LineItemId) -> Result<bool, StoreError> {
        let mut data = self.write()?;
        let before = data.cart_lines.len();
        data.cart_lines.retain(|l| &l.id != id);
        Ok(data.cart_lines.len() < before)
    }

    fn clear_cart(&self, user_id: &UserId) -> Result<usize, StoreError> {
        let mut data = self.write()?;
        let before = data.cart_lines.len();
        data.cart_lines.retain(|l| &l.user_id != user_id);
        Ok(before - data.cart_lines.len())
    }

    fn reviews(&self, product_id: &ProductId) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .read()?
            .reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .cloned()
            .collect())
    }

    fn insert_review(&self, review: Review) -> Result<(), StoreError> {
        self.write()?.reviews.push(review);
        Ok(())
    }

    fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.read()?.orders.clone())
    }

    fn set_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<bool, StoreError> {
        let mut data = self.write()?;
        match data.orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                order.set_status(status);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
