//! # Books
//!
//! Second-hand book listings held by a [`BookManager`].
//!
//! - [`entity`] - [`Record`](catalog_framework::Record) implementation and condition updates
//! - [`error`] - [`BookError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Book;
use catalog_framework::Collection;

/// The collection of book listings, keyed by [`BookId`](crate::model::BookId).
pub type BookManager = Collection<Book>;

/// Creates a new, empty book manager.
pub fn new() -> BookManager {
    BookManager::new()
}
