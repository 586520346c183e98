//! Record trait implementation and guarded updates for the User domain type.
//!
//! This module contains the [`Record`] trait implementation that enables [`User`]
//! to be managed by a [`Collection`](catalog_framework::Collection), and the email
//! change rule shared by every role.

use super::UserError;
use crate::model::{User, UserId, CAMPUS_EMAIL_DOMAIN};
use catalog_framework::Record;
use tracing::{info, warn};

impl Record for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &UserId {
        &self.profile.id
    }
}

/// Checks that `email` belongs to the campus domain.
///
/// This is a substring match on [`CAMPUS_EMAIL_DOMAIN`], not a full address
/// syntax check.
pub fn validate_campus_email(email: &str) -> Result<(), UserError> {
    if email.contains(CAMPUS_EMAIL_DOMAIN) {
        Ok(())
    } else {
        Err(UserError::InvalidEmail(email.to_string()))
    }
}

impl User {
    /// Replaces the email if `new_email` is a campus address.
    ///
    /// # Errors
    /// [`UserError::InvalidEmail`] otherwise; the user is left unchanged.
    pub fn try_change_email(&mut self, new_email: impl Into<String>) -> Result<(), UserError> {
        let new_email = new_email.into();
        validate_campus_email(&new_email)?;
        info!(id = %self.profile.id, name = %self.profile.name, email = %new_email, "Email updated");
        self.profile.email = new_email;
        Ok(())
    }

    /// Boolean form of [`try_change_email`](Self::try_change_email): a rejected
    /// address is logged and reported as `false`.
    pub fn change_email(&mut self, new_email: impl Into<String>) -> bool {
        match self.try_change_email(new_email) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %self.profile.id, error = %e, "Email change rejected");
                false
            }
        }
    }
}
