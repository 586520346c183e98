//! Record trait implementation for the Order domain type.

use super::OrderError;
use crate::model::{Order, OrderId, Status};
use catalog_framework::Record;
use tracing::{info, warn};

impl Record for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl Order {
    /// Sets the status from its name. Transitions are not ordered: any known
    /// status is accepted from any other.
    ///
    /// # Errors
    /// [`OrderError::InvalidStatus`] if `new_status` is not a known status.
    pub fn try_update_status(&mut self, new_status: &str) -> Result<(), OrderError> {
        let status: Status = new_status.parse()?;
        self.status = status;
        info!(id = %self.id, %status, "Status updated");
        Ok(())
    }

    /// Boolean form of [`try_update_status`](Self::try_update_status).
    pub fn update_status(&mut self, new_status: &str) -> bool {
        match self.try_update_status(new_status) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %self.id, error = %e, "Status update rejected");
                false
            }
        }
    }
}
