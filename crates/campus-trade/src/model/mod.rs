//! Pure data structures implementing the [`Record`](catalog_framework::Record) trait.

pub mod book;
pub mod order;
pub mod user;

pub use book::*;
pub use order::*;
pub use user::*;

/// Rounds a money amount to one decimal place.
///
/// Rounding happens on the exact decimal value of `amount`, so `19.95` (stored as
/// `19.9499…`) becomes `19.9`, exact ties go to the even digit, and large values
/// never overflow.
pub(crate) fn round_to_tenth(amount: f64) -> f64 {
    format!("{amount:.1}").parse().unwrap_or(amount)
}
