//! Represents a purchase of one book by one buyer.
//!
//! # Catalog Framework
//! [`Order`] implements the [`Record`](catalog_framework::Record) trait,
//! allowing it to be managed by an [`OrderManager`](crate::orders::OrderManager).
//!
//! An order refers to its buyer and book by id only. Changing its status never
//! touches the book's condition, and the other way round.

use crate::model::{round_to_tenth, BookId, UserId};
use crate::orders::OrderError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for OrderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in its life. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::Paid,
        Status::Shipped,
        Status::Completed,
        Status::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Paid => "paid",
            Status::Shipped => "shipped",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::InvalidStatus(s.to_string()))
    }
}

/// A customer order. Total is fixed once placed; only the status changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub(crate) id: OrderId,
    pub buyer_id: UserId,
    pub book_id: BookId,
    pub(crate) total: f64,
    pub(crate) status: Status,
}

/// Read-only projection of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub buyer: UserId,
    pub book: BookId,
    pub total: f64,
    pub status: Status,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the caller
    /// * `buyer_id` - ID of the buying user
    /// * `book_id` - ID of the book being bought
    /// * `total` - Amount due, stored rounded to one decimal place
    ///
    /// # Notes
    /// The order always starts out [`Status::Pending`].
    ///
    /// # Errors
    /// [`OrderError::NegativeTotal`] if `total` is negative (or not a number).
    pub fn new(
        id: impl Into<OrderId>,
        buyer_id: impl Into<UserId>,
        book_id: impl Into<BookId>,
        total: f64,
    ) -> Result<Self, OrderError> {
        if total.is_nan() || total < 0.0 {
            return Err(OrderError::NegativeTotal(total));
        }
        Ok(Self {
            id: id.into(),
            buyer_id: buyer_id.into(),
            book_id: book_id.into(),
            total: round_to_tenth(total),
            status: Status::Pending,
        })
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn get_details(&self) -> OrderDetails {
        OrderDetails {
            id: self.id.clone(),
            buyer: self.buyer_id.clone(),
            book: self.book_id.clone(),
            total: self.total,
            status: self.status,
        }
    }
}
