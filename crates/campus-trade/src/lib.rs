//! # Campus Trade Library
//!
//! Records and managers for a small campus second-hand trading catalog.
//!
//! - **[model]**: the records ([`User`](model::User), [`Book`](model::Book),
//!   [`Order`](model::Order)) and their read-only projections.
//! - **[users]**, **[books]**, **[orders]**: per-kind `Record` implementations,
//!   guarded updates, error types and manager aliases.
//! - **[marketplace]**: one caller-owned bundle of the three managers.
//! - **[settings]**: configuration for the demo binary.
//!
//! ## Failure Model
//!
//! Construction rejects bad input with a `Result` (a negative price never makes a
//! `Book`). After that, guarded updates and manager operations answer with `bool`
//! and log a `warn!` line when they refuse, so a batch can carry on past one bad
//! record. Each of them also has a `try_*` form returning the typed error.

pub mod books;
pub mod marketplace;
pub mod model;
pub mod orders;
pub mod settings;
pub mod users;
