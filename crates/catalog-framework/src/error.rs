//! # Collection Errors
//!
//! Failures a [`Collection`](crate::Collection) reports. The boolean operations
//! (`add`, `remove`) log these and return `false`; the `try_*` forms hand them
//! back to the caller.

/// Errors that can occur while adding to or removing from a collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A record with the same identifier is already stored.
    #[error("{kind} {id} already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// No stored record carries the requested identifier.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}
