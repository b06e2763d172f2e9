//! Backing store consulted by the cache on a miss
//!
//! The store owns every account for the lifetime of the process. The cache
//! only ever holds extra `Arc` handles to the same accounts, so a mutation
//! made through a cached handle is visible through the store as well.

use std::sync::Arc;

use hashbrown::HashMap;

use crate::account::Account;

/// Authoritative keyed source of accounts
pub trait AccountStore: Send + Sync {
    /// Look up an account by key
    fn get(&self, key: u64) -> Option<Arc<Account>>;

    /// Number of accounts held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store populated once at construction and read-only afterwards
#[derive(Debug, Default)]
pub struct SeededStore {
    accounts: HashMap<u64, Arc<Account>>,
}

impl SeededStore {
    /// Build a store keyed by each account's id
    ///
    /// A later account with the same id replaces an earlier one.
    pub fn from_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = Account>,
    {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.id(), Arc::new(account)))
            .collect();
        Self { accounts }
    }

    /// Store seeded with the five demo accounts
    #[must_use]
    pub fn demo() -> Self {
        Self::from_accounts([
            Account::new(1, 1, "Vishnu", 24000.0),
            Account::new(2, 2, "Udaya", 23450.0),
            Account::new(3, 3, "Lalitha", 23540.0),
            Account::new(4, 4, "Madhuri", 42350.0),
            Account::new(5, 5, "Anushka", 54320.0),
        ])
    }

    /// Keys held by the store, in ascending order
    #[must_use]
    pub fn keys(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.accounts.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl AccountStore for SeededStore {
    fn get(&self, key: u64) -> Option<Arc<Account>> {
        self.accounts.get(&key).cloned()
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
