//! Eviction candidate selection
//!
//! Each slot carries two ticks from the cache's logical clock. FIFO orders
//! by admission tick and LRU by last-use tick; ticks are unique, so the
//! victim is always well defined.

use std::sync::atomic::Ordering;

use super::super::cache_config::EvictionPolicy;
use super::core::{AccountCache, CacheEntries, Slot};
use crate::error::Result;

impl Slot {
    fn order_tick(&self, policy: EvictionPolicy) -> u64 {
        match policy {
            EvictionPolicy::Fifo => self.admitted_at,
            EvictionPolicy::Lru => self.last_used,
        }
    }
}

impl CacheEntries {
    /// Key that the next eviction would remove
    pub(super) fn victim(&self, policy: EvictionPolicy) -> Option<u64> {
        self.slots
            .iter()
            .min_by_key(|(_, slot)| slot.order_tick(policy))
            .map(|(key, _)| *key)
    }

    /// Remove the next victim, returning its key
    pub(super) fn evict_one(&mut self, policy: EvictionPolicy) -> Option<u64> {
        let key = self.victim(policy)?;
        self.slots.remove(&key);
        Some(key)
    }

    /// Resident keys from next victim to most protected
    pub(super) fn eviction_order(&self, policy: EvictionPolicy) -> Vec<u64> {
        let mut candidates: Vec<(u64, u64)> = self
            .slots
            .iter()
            .map(|(key, slot)| (*key, slot.order_tick(policy)))
            .collect();
        candidates.sort_by_key(|(_, tick)| *tick);
        candidates.into_iter().map(|(key, _)| key).collect()
    }
}

impl AccountCache {
    /// Make room for one admission; the caller holds the entries lock
    ///
    /// Returns the number of entries evicted.
    pub(super) fn evict_for_admission(&self, entries: &mut CacheEntries) -> u32 {
        let policy = self.config.eviction_policy;
        let mut evicted_count = 0;

        while entries.slots.len() >= self.config.capacity {
            let Some(key) = entries.evict_one(policy) else {
                break;
            };
            self.stats.record_eviction();
            evicted_count += 1;

            tracing::debug!(
                target: "bankcache::cache",
                key = key,
                operation = "evict",
                eviction_policy = policy.as_str(),
                outcome = "evicted",
                "Cache evicted entry to admit a new account"
            );
        }

        self.entry_count.store(entries.slots.len(), Ordering::Relaxed);
        evicted_count
    }

    /// Resident keys ordered from the next eviction victim to the most protected entry
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the entries lock is poisoned.
    pub fn keys(&self) -> Result<Vec<u64>> {
        let entries = self.lock_entries()?;
        Ok(entries.eviction_order(self.config.eviction_policy))
    }

    /// Key the next admission into a full cache would evict
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the entries lock is poisoned.
    pub fn next_victim(&self) -> Result<Option<u64>> {
        let entries = self.lock_entries()?;
        Ok(entries.victim(self.config.eviction_policy))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::account::Account;

    fn entries_with(keys: &[u64]) -> CacheEntries {
        let mut entries = CacheEntries::default();
        for key in keys {
            entries.insert(*key, Arc::new(Account::new(*key, *key, "test", 0.0)));
        }
        entries
    }

    #[test]
    fn fifo_victim_is_oldest_admission() {
        let mut entries = entries_with(&[7, 3, 9]);
        assert_eq!(entries.eviction_order(EvictionPolicy::Fifo), vec![7, 3, 9]);
        assert_eq!(entries.evict_one(EvictionPolicy::Fifo), Some(7));
        assert_eq!(entries.evict_one(EvictionPolicy::Fifo), Some(3));
        assert_eq!(entries.slots.len(), 1);
    }

    #[test]
    fn lru_victim_follows_last_use() {
        let mut entries = entries_with(&[1, 2, 3]);
        entries.clock += 1;
        let tick = entries.clock;
        if let Some(slot) = entries.slots.get_mut(&1) {
            slot.last_used = tick;
        }
        assert_eq!(entries.victim(EvictionPolicy::Lru), Some(2));
        assert_eq!(entries.victim(EvictionPolicy::Fifo), Some(1));
    }

    #[test]
    fn empty_entries_have_no_victim() {
        let mut entries = CacheEntries::default();
        assert_eq!(entries.evict_one(EvictionPolicy::Lru), None);
        assert!(entries.eviction_order(EvictionPolicy::Fifo).is_empty());
    }
}
