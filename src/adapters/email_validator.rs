//! Email syntax adapter backed by the `validator` crate.

use validator::ValidateEmail;

use crate::ports::{EmailValidator, Result};

/// Forwards addresses to `validator`'s HTML5/RFC 5322 email check.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    /// Create a new [`EmailValidatorAdapter`].
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}
