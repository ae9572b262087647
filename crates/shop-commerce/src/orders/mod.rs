//! Orders module.
//!
//! Contains order records and the admin dashboard statistics.

mod dashboard;
mod order;

pub use dashboard::{DashboardStats, RECENT_ORDERS_LIMIT};
pub use order::{Order, OrderStatus};
