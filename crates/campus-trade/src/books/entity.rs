//! Record trait implementation for the Book domain type.
//!
//! Includes the guarded condition update.

use super::BookError;
use crate::model::{Book, BookId, Condition};
use catalog_framework::Record;
use tracing::{info, warn};

impl Record for Book {
    type Id = BookId;
    const KIND: &'static str = "book";

    fn id(&self) -> &BookId {
        &self.id
    }
}

impl Book {
    /// Sets the condition from its name.
    ///
    /// # Errors
    /// [`BookError::InvalidCondition`] if `new_condition` is not a known condition;
    /// the book is left unchanged.
    pub fn try_update_condition(&mut self, new_condition: &str) -> Result<(), BookError> {
        let condition: Condition = new_condition.parse()?;
        self.condition = condition;
        info!(id = %self.id, %condition, "Condition updated");
        Ok(())
    }

    /// Boolean form of [`try_update_condition`](Self::try_update_condition).
    pub fn update_condition(&mut self, new_condition: &str) -> bool {
        match self.try_update_condition(new_condition) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %self.id, error = %e, "Condition update rejected");
                false
            }
        }
    }
}
