//! In-memory account store
//!
//! Test double for [`AccountStore`]. Keeps the record in memory and counts
//! writes, so tests can assert that rejected operations never persist.

use crate::core::traits::AccountStore;
use crate::types::{Account, AtmError};

#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    account: Option<Account>,
    writes: usize,
}

impl MemoryAccountStore {
    /// Empty store, as on first run
    pub fn new() -> Self {
        MemoryAccountStore::default()
    }

    /// Store that already holds a record
    pub fn with_account(account: Account) -> Self {
        MemoryAccountStore {
            account: Some(account),
            writes: 0,
        }
    }

    /// Number of successful `save` calls
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }
}

impl AccountStore for MemoryAccountStore {
    fn exists(&self) -> bool {
        self.account.is_some()
    }

    fn load(&self) -> Result<Option<Account>, AtmError> {
        Ok(self.account.clone())
    }

    fn save(&mut self, account: &Account) -> Result<(), AtmError> {
        self.account = Some(account.clone());
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
