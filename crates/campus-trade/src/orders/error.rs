//! Error types for orders.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order total is below zero (or not a number).
    #[error("Order total can't be negative: {0}")]
    NegativeTotal(f64),

    /// The status is not one of `pending`, `paid`, `shipped`, `completed`, `cancelled`.
    #[error("Invalid status {0:?}. Choose: pending, paid, shipped, completed, cancelled")]
    InvalidStatus(String),
}
