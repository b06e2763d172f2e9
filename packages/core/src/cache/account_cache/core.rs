//! Core `AccountCache` structure and initialization
//!
//! Entries live behind a single coarse mutex so that the size check, the
//! eviction and the insertion of an admission form one critical section.
//! Occupancy is mirrored into an atomic so statistics never take the lock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use hashbrown::HashMap;

use super::super::{
    cache_config::CacheConfig,
    cache_stats::{CacheStats, CacheStatsSnapshot},
};
use crate::account::Account;
use crate::config::validation::Validator;
use crate::error::{Error, Result};
use crate::store::AccountStore;

/// Bounded read-through cache of accounts in front of an `AccountStore`
pub struct AccountCache {
    /// Resident entries and their ordering clock
    pub(super) entries: Mutex<CacheEntries>,
    /// Authoritative source consulted on a miss
    pub(super) store: Arc<dyn AccountStore>,
    /// Configuration
    pub(super) config: CacheConfig,
    /// Entry count, written under the entries lock
    pub(super) entry_count: AtomicUsize,
    /// Cache statistics
    pub(super) stats: CacheStats,
}

/// Resident entries plus the logical clock used to order them
#[derive(Debug, Default)]
pub(super) struct CacheEntries {
    pub(super) slots: HashMap<u64, Slot>,
    pub(super) clock: u64,
}

/// One resident account with its ordering stamps
#[derive(Debug)]
pub(super) struct Slot {
    pub(super) account: Arc<Account>,
    /// Tick at which the entry was admitted
    pub(super) admitted_at: u64,
    /// Tick of the latest admission or LRU hit
    pub(super) last_used: u64,
}

impl CacheEntries {
    pub(super) fn insert(&mut self, key: u64, account: Arc<Account>) {
        self.clock += 1;
        self.slots.insert(
            key,
            Slot {
                account,
                admitted_at: self.clock,
                last_used: self.clock,
            },
        );
    }
}

impl AccountCache {
    /// Create a new cache in front of `store`
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `config` does not validate, for
    /// example a zero capacity.
    pub fn new(config: CacheConfig, store: Arc<dyn AccountStore>) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            target: "bankcache::cache",
            capacity = config.capacity,
            eviction_policy = config.eviction_policy.as_str(),
            store_size = store.len(),
            "Account cache created"
        );

        Ok(Self {
            entries: Mutex::new(CacheEntries::default()),
            store,
            config,
            entry_count: AtomicUsize::new(0),
            stats: CacheStats::new(),
        })
    }

    /// Create a cache with the default configuration
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the signature matches `new`.
    pub fn with_store(store: Arc<dyn AccountStore>) -> Result<Self> {
        Self::new(CacheConfig::default(), store)
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of resident entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entry_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live counters
    #[must_use]
    pub fn counters(&self) -> &CacheStats {
        &self.stats
    }

    /// Statistics report including occupancy
    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.len(), self.config.capacity)
    }

    /// The backing store behind this cache
    #[must_use]
    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Drop every resident entry; counters are left untouched
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the entries lock is poisoned.
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.lock_entries()?;
        entries.slots.clear();
        self.entry_count.store(0, Ordering::Relaxed);
        Ok(())
    }

    pub(super) fn lock_entries(&self) -> Result<MutexGuard<'_, CacheEntries>> {
        match self.entries.lock() {
            Ok(guard) => Ok(guard),
            Err(_poisoned) => {
                tracing::error!(
                    target: "bankcache::cache",
                    "Cache entries mutex poisoned"
                );
                Err(Error::LockPoisoned {
                    resource: "cache entries",
                })
            }
        }
    }
}

impl std::fmt::Debug for AccountCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCache")
            .field("config", &self.config)
            .field("len", &self.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
