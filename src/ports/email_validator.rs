//! Email syntax port.

use crate::ports::error::Result;

/// Port for checking the syntax of an email address.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a syntactically valid address.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the check itself could not run. This is not the
    /// same as an invalid address.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
