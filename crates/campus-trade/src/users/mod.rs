//! # Users
//!
//! Sellers, buyers and plain members, all held by one [`UserManager`].
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](catalog_framework::Record) implementation and the email rule
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates an empty manager
//!
//! ## Usage
//!
//! ```rust
//! use campus_trade::model::User;
//! use campus_trade::users;
//!
//! let mut manager = users::new();
//! manager.add(User::seller("Anna", "S001", "anna@school.edu", "Anna's Book Shop"));
//!
//! let anna = manager.get_mut("S001").unwrap();
//! assert!(!anna.change_email("anna@gmail.com"));
//! assert!(anna.change_email("anna.k@school.edu"));
//! ```

pub mod entity;
pub mod error;

pub use entity::validate_campus_email;
pub use error::*;

use crate::model::User;
use catalog_framework::Collection;

/// The collection of users, keyed by [`UserId`](crate::model::UserId).
pub type UserManager = Collection<User>;

/// Creates a new, empty user manager.
pub fn new() -> UserManager {
    UserManager::new()
}
