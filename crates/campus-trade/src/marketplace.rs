//! # Marketplace
//!
//! Bundles the three managers a trading session works with. A `Marketplace` is an
//! ordinary value owned by its caller; create as many as you like.

use crate::books::{self, BookManager};
use crate::model::{BookDetails, OrderDetails, UserInfo};
use crate::orders::{self, OrderManager};
use crate::users::{self, UserManager};
use serde::{Deserialize, Serialize};

/// The users, book listings and orders of one trading session.
#[derive(Debug, Default)]
pub struct Marketplace {
    pub users: UserManager,
    pub books: BookManager,
    pub orders: OrderManager,
}

/// Projections of everything a [`Marketplace`] holds, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceSummary {
    pub users: Vec<UserInfo>,
    pub books: Vec<BookDetails>,
    pub orders: Vec<OrderDetails>,
}

impl Marketplace {
    /// Creates a marketplace with three empty managers.
    pub fn new() -> Self {
        Self {
            users: users::new(),
            books: books::new(),
            orders: orders::new(),
        }
    }

    pub fn summary(&self) -> MarketplaceSummary {
        MarketplaceSummary {
            users: self.users.iter().map(|u| u.get_info()).collect(),
            books: self.books.iter().map(|b| b.get_details()).collect(),
            orders: self.orders.iter().map(|o| o.get_details()).collect(),
        }
    }
}
