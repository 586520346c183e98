//! Error types for book listings.

use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The asking price is below zero (or not a number).
    #[error("Price can't be negative: {0}")]
    NegativePrice(f64),

    /// The condition is not one of `new`, `like_new`, `used`, `sold`.
    #[error("Invalid condition {0:?}. Choose: new, like_new, used, sold")]
    InvalidCondition(String),
}
