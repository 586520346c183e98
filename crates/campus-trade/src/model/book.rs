//! Represents a second-hand book listed for sale.
//!
//! # Catalog Framework
//! [`Book`] implements the [`Record`](catalog_framework::Record) trait,
//! allowing it to be managed by a [`BookManager`](crate::books::BookManager).
//!
//! See [`books::entity`](crate::books::entity) for the guarded condition update.

use crate::books::BookError;
use crate::model::{round_to_tenth, UserId};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Physical state of a listed book. `Sold` marks it as no longer available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    Used,
    Sold,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Used,
        Condition::Sold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like_new",
            Condition::Used => "used",
            Condition::Sold => "sold",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| BookError::InvalidCondition(s.to_string()))
    }
}

/// A book listing. Price is fixed once listed; only the condition changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub(crate) id: BookId,
    pub title: String,
    pub author: String,
    /// The listing seller. Not checked against any user manager.
    pub seller_id: UserId,
    pub(crate) price: f64,
    pub(crate) condition: Condition,
}

/// Read-only projection of a [`Book`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub seller: UserId,
    pub price: f64,
    pub condition: Condition,
}

impl Book {
    /// Creates a new Book listing.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the caller
    /// * `title` - Book title
    /// * `author` - Book author
    /// * `seller_id` - Id of the selling user
    /// * `price` - Asking price, stored rounded to one decimal place
    /// * `condition` - Initial condition
    ///
    /// # Errors
    /// [`BookError::NegativePrice`] if `price` is negative (or not a number).
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        seller_id: impl Into<UserId>,
        price: f64,
        condition: Condition,
    ) -> Result<Self, BookError> {
        if price.is_nan() || price < 0.0 {
            return Err(BookError::NegativePrice(price));
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            seller_id: seller_id.into(),
            price: round_to_tenth(price),
            condition,
        })
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn get_details(&self) -> BookDetails {
        BookDetails {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            seller: self.seller_id.clone(),
            price: self.price,
            condition: self.condition,
        }
    }
}
