//! Account creation use case port.

use async_trait::async_trait;

use crate::dto::{Account, AddAccountInput};
use crate::ports::error::Result;

/// Port for the account creation use case.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account and return it with its assigned identifier.
    async fn add(&self, input: AddAccountInput) -> Result<Account>;
}
