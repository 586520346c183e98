//! Error types for users.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The new address does not belong to the campus domain.
    #[error("{0} is not a valid campus email")]
    InvalidEmail(String),
}
