//! Admin dashboard statistics.

use crate::money::Money;
use crate::orders::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// How many orders the dashboard lists as "recent".
pub const RECENT_ORDERS_LIMIT: usize = 10;

/// Store-wide figures for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub pending_orders: usize,
    pub processing_orders: usize,
    pub shipped_orders: usize,
    pub delivered_orders: usize,
    pub cancelled_orders: usize,
    /// Sum of all order totals.
    pub total_revenue: Money,
    /// Newest orders first.
    pub recent_orders: Vec<Order>,
}

impl DashboardStats {
    pub fn compute(total_products: usize, mut orders: Vec<Order>) -> Self {
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let mut stats = Self {
            total_products,
            total_orders: orders.len(),
            pending_orders: count(OrderStatus::Pending),
            processing_orders: count(OrderStatus::Processing),
            shipped_orders: count(OrderStatus::Shipped),
            delivered_orders: count(OrderStatus::Delivered),
            cancelled_orders: count(OrderStatus::Cancelled),
            total_revenue: orders.iter().map(|o| o.total).sum(),
            recent_orders: Vec::new(),
        };

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        orders.truncate(RECENT_ORDERS_LIMIT);
        stats.recent_orders = orders;
        stats
    }

    pub fn count_for(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending_orders,
            OrderStatus::Processing => self.processing_orders,
            OrderStatus::Shipped => self.shipped_orders,
            OrderStatus::Delivered => self.delivered_orders,
            OrderStatus::Cancelled => self.cancelled_orders,
        }
    }
}
