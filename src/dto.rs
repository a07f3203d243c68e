//! Data Transfer Objects for account registration.
//!
//! DTOs carry data between the controller and the account-creation use case
//! without exposing how the use case stores it.

use serde::{Deserialize, Serialize};

/// Validated input handed to the account-creation use case.
///
/// The password confirmation is checked by the controller and never
/// forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountInput {
    /// Display name.
    pub name: String,
    /// Email address, exactly as submitted.
    pub email: String,
    /// Password, exactly as submitted.
    pub password: String,
}

/// Account as returned by the account-creation use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier assigned by the use case.
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Account {
    /// Build an [`Account`] from validated input and an assigned identifier.
    pub fn new(id: impl Into<String>, input: AddAccountInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}
