//! Cache lookup and admission
//!
//! A lookup takes the entries lock only to probe (and, under LRU, refresh)
//! the resident slot. On a miss the store is consulted without the lock
//! held, then the account is admitted in a second critical section that
//! re-checks residency, evicts as needed and inserts.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::super::cache_config::EvictionPolicy;
use super::core::AccountCache;
use crate::account::Account;
use crate::error::{Error, Result};

impl AccountCache {
    /// Look up an account, reading through to the store on a miss
    ///
    /// Returns `Ok(None)` when the key exists neither in the cache nor in
    /// the store; nothing is admitted in that case.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the entries lock is poisoned.
    pub fn get(&self, key: u64) -> Result<Option<Arc<Account>>> {
        if let Some(account) = self.probe(key)? {
            self.stats.record_hit();
            tracing::debug!(
                target: "bankcache::cache",
                key = key,
                operation = "get",
                outcome = "hit",
                "Cache hit"
            );
            return Ok(Some(account));
        }

        self.stats.record_miss();
        tracing::debug!(
            target: "bankcache::cache",
            key = key,
            operation = "get",
            outcome = "miss",
            "Cache miss, consulting backing store"
        );

        let Some(account) = self.store.get(key) else {
            tracing::debug!(
                target: "bankcache::cache",
                key = key,
                operation = "get",
                outcome = "not_found",
                "Account not found in backing store"
            );
            return Ok(None);
        };

        self.admit(key, account).map(Some)
    }

    /// Look up an account, reporting absence as `Error::NotFound`
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the key exists neither in the cache nor in the store
    /// - `Error::LockPoisoned` if the entries lock is poisoned
    pub fn fetch(&self, key: u64) -> Result<Arc<Account>> {
        self.get(key)?.ok_or(Error::NotFound { key })
    }

    /// True if `key` is resident; does not count as a lookup
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the entries lock is poisoned.
    pub fn contains(&self, key: u64) -> Result<bool> {
        Ok(self.lock_entries()?.slots.contains_key(&key))
    }

    fn probe(&self, key: u64) -> Result<Option<Arc<Account>>> {
        let mut entries = self.lock_entries()?;
        let entries = &mut *entries;

        let Some(slot) = entries.slots.get_mut(&key) else {
            return Ok(None);
        };
        if self.config.eviction_policy == EvictionPolicy::Lru {
            entries.clock += 1;
            slot.last_used = entries.clock;
        }
        Ok(Some(Arc::clone(&slot.account)))
    }

    fn admit(&self, key: u64, account: Arc<Account>) -> Result<Arc<Account>> {
        let mut entries = self.lock_entries()?;

        // A concurrent miss on the same key may have admitted it first
        if let Some(slot) = entries.slots.get(&key) {
            tracing::debug!(
                target: "bankcache::cache",
                key = key,
                operation = "admit",
                outcome = "already_resident",
                "Account admitted by a concurrent lookup"
            );
            return Ok(Arc::clone(&slot.account));
        }

        let evicted = self.evict_for_admission(&mut entries);
        entries.insert(key, Arc::clone(&account));
        self.entry_count.store(entries.slots.len(), Ordering::Relaxed);

        tracing::debug!(
            target: "bankcache::cache",
            key = key,
            operation = "admit",
            outcome = "admitted",
            evicted_count = evicted,
            size = entries.slots.len(),
            capacity = self.config.capacity,
            "Account admitted into cache"
        );

        Ok(account)
    }
}
