//! # Catalog Framework
//!
//! Building blocks for keeping small, strongly-typed catalogs of records in memory.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into two layers:
//!
//! 1. **Record Layer** ([`Record`]) - your domain types and how each one names itself
//! 2. **Storage Layer** ([`Collection`]) - ordered storage, duplicate rejection, removal
//!
//! Business rules (validation, guarded updates) live on the records. The collection
//! only cares about identity, so it is written once and reused for every kind.
//!
//! ## Failure Model
//!
//! - **Construction errors** belong to the records and are returned as `Result`.
//! - **Collection errors** ([`CollectionError`]) are either returned by the `try_*`
//!   operations or logged and flattened to `false` by `add` / `remove`.
//!
//! Nothing here is shared or locked: a collection is a plain value owned by its caller.
//!
//! ## Observability
//!
//! Every operation logs through `tracing`; see the [`tracing`] module for subscriber
//! setup.

pub mod collection;
pub mod error;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use collection::Collection;
pub use error::CollectionError;
pub use record::Record;
