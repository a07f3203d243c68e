//! Process-local account store.
//!
//! Accounts live as long as the process. Useful for development and tests
//! of the transport; a real deployment injects its own [`AddAccount`].

use std::collections::HashMap;

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::dto::{Account, AddAccountInput};
use crate::ports::{AddAccount, ApplicationError, Result, ToInternal};

pub const DEFAULT_MAX_ACCOUNTS: usize = 10_000;
const ID_LENGTH: usize = 16;

/// In-memory implementation of [`AddAccount`].
#[derive(Debug)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
    max_accounts: usize,
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ACCOUNTS)
    }
}

impl MemoryAccountStore {
    /// Create an empty store holding at most `max_accounts` records.
    pub fn new(max_accounts: usize) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            max_accounts,
        }
    }

    /// Get an account by its identifier.
    pub async fn find(&self, id: &str) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the store holds no account.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

/// Random hex identifier read from the OS entropy source.
fn generate_id() -> Result<String> {
    let mut bytes = [0u8; ID_LENGTH];
    OsRng.try_fill_bytes(&mut bytes).catch()?;

    Ok(hex::encode(bytes))
}

#[async_trait]
impl AddAccount for MemoryAccountStore {
    async fn add(&self, input: AddAccountInput) -> Result<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.len() >= self.max_accounts {
            return Err(ApplicationError::Unavailable {
                service: "account store",
            });
        }

        let mut id = generate_id()?;
        while accounts.contains_key(&id) {
            id = generate_id()?;
        }

        let account = Account::new(id.clone(), input);
        accounts.insert(id, account.clone());

        Ok(account)
    }
}
