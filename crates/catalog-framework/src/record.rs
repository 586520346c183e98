//! # Record Trait
//!
//! The `Record` trait is the contract every stored kind (users, books, orders, …)
//! implements to be held by the generic [`Collection`](crate::Collection).
//!
//! # Architecture Note
//! A collection never probes what a record *is* to find out what it is called.
//! Each kind exposes its identifier directly through [`Record::id`], so the
//! duplicate check and the removal scan are written *once* and work the same
//! for every kind.
//!
//! The associated `Id` type keeps kinds apart at compile time: a `BookId`
//! cannot be used to remove an order.

use std::fmt::{Debug, Display};

/// Trait that any record must implement to be managed by a [`Collection`](crate::Collection).
pub trait Record: Debug {
    /// The identifying key for this record kind (e.g., a `String` newtype).
    type Id: Eq + Clone + Display + Debug;

    /// Short, lowercase name of the record kind used in diagnostics
    /// (e.g., `"book"`).
    const KIND: &'static str;

    /// Returns the identifying key of this record.
    fn id(&self) -> &Self::Id;
}
