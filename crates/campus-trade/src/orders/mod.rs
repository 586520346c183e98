//! # Orders
//!
//! Purchases held by an [`OrderManager`]. Buyer and book are referenced by id
//! only; nothing checks that they exist.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use catalog_framework::Collection;

/// The collection of orders, keyed by [`OrderId`](crate::model::OrderId).
pub type OrderManager = Collection<Order>;

/// Creates a new, empty order manager.
pub fn new() -> OrderManager {
    OrderManager::new()
}
