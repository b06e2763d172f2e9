//! Core `BankCacheBuilder` structure
//!
//! Collects the cache configuration and the backing store, then validates
//! everything once in `build`.

use std::sync::Arc;

use bankcache_core::{
    Account, AccountCache, AccountStore, CacheConfig, EvictionPolicy, Result, SeededStore,
};

use crate::BankCache;

/// Fluent builder for `BankCache`
///
/// Without an explicit store the builder falls back to the five demo
/// accounts of `SeededStore::demo`.
#[derive(Default)]
pub struct BankCacheBuilder {
    /// Cache configuration being built
    pub(crate) config: CacheConfig,
    /// Backing store, demo seed when unset
    pub(crate) store: Option<Arc<dyn AccountStore>>,
}

impl BankCacheBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of resident accounts
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    #[must_use]
    pub fn eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.config.eviction_policy = policy;
        self
    }

    /// Replace the whole cache configuration
    #[must_use]
    pub fn config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing store
    #[must_use]
    pub fn store(mut self, store: Arc<dyn AccountStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Seed a fresh in-memory store with `accounts`
    #[must_use]
    pub fn accounts<I>(self, accounts: I) -> Self
    where
        I: IntoIterator<Item = Account>,
    {
        self.store(Arc::new(SeededStore::from_accounts(accounts)))
    }

    /// Validate the configuration and construct the cache
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the configuration does not validate.
    pub fn build(self) -> Result<BankCache> {
        let store: Arc<dyn AccountStore> = match self.store {
            Some(store) => store,
            None => Arc::new(SeededStore::demo()),
        };
        let cache = AccountCache::new(self.config, store)?;
        Ok(BankCache { cache })
    }
}

impl std::fmt::Debug for BankCacheBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankCacheBuilder")
            .field("config", &self.config)
            .field("store_size", &self.store.as_ref().map(|store| store.len()))
            .finish()
    }
}
