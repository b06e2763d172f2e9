//! Cache statistics and metrics tracking
//!
//! Counters are cache-padded atomics bumped with relaxed ordering. They are
//! monotonic for the lifetime of the cache and may be read at any time; a
//! snapshot taken while lookups are in flight is eventually consistent.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_utils::CachePadded;
use serde::Serialize;

/// Hit, miss and eviction counters for the account cache
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    hits: CachePadded<AtomicU64>,
    /// Lookups that went to the backing store
    misses: CachePadded<AtomicU64>,
    /// Entries removed to make room for an admission
    evictions: CachePadded<AtomicU64>,
}

impl CacheStats {
    /// Create new cache statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache eviction
    #[inline]
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Fraction of lookups answered from the cache, `None` before the first lookup
    #[must_use]
    pub fn hit_ratio(&self) -> Option<f64> {
        hit_ratio(self.hits(), self.misses())
    }

    /// Fraction of lookups that missed, `None` before the first lookup
    #[must_use]
    pub fn miss_ratio(&self) -> Option<f64> {
        hit_ratio(self.hits(), self.misses()).map(|ratio| 1.0 - ratio)
    }

    /// Immutable view of the counters combined with the cache's occupancy
    #[must_use]
    pub fn snapshot(&self, size: usize, capacity: usize) -> CacheStatsSnapshot {
        let hits = self.hits();
        let misses = self.misses();
        let hit_ratio = hit_ratio(hits, misses);

        CacheStatsSnapshot {
            hits,
            misses,
            evictions: self.evictions(),
            size,
            capacity,
            hit_ratio,
            miss_ratio: hit_ratio.map(|ratio| 1.0 - ratio),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn hit_ratio(hits: u64, misses: u64) -> Option<f64> {
    let total = hits.saturating_add(misses);
    if total == 0 {
        return None;
    }

    if total > (1u64 << 53) {
        // Beyond f64's exact integer range, scale in integers first
        let scaled = (u128::from(hits) * 1_000_000_000) / u128::from(total);
        Some(scaled as f64 / 1_000_000_000.0)
    } else {
        Some(hits as f64 / total as f64)
    }
}

/// Point-in-time statistics report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub size: usize,
    pub capacity: usize,
    /// `None` until at least one lookup happened
    pub hit_ratio: Option<f64>,
    /// `None` until at least one lookup happened
    pub miss_ratio: Option<f64>,
}

impl CacheStatsSnapshot {
    /// Total lookups served
    #[must_use]
    pub fn lookups(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }
}

struct Percent(Option<f64>);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ratio) => write!(f, "{:.2}%", ratio * 100.0),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for CacheStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache Hits: {}", self.hits)?;
        writeln!(f, "Cache Misses: {}", self.misses)?;
        writeln!(f, "Cache Evictions: {}", self.evictions)?;
        writeln!(f, "Cache Size: {}", self.size)?;
        writeln!(f, "Cache Capacity: {}", self.capacity)?;
        writeln!(f, "Cache Efficiency: {}", Percent(self.hit_ratio))?;
        writeln!(f, "Cache Hit Ratio: {}", Percent(self.hit_ratio))?;
        write!(f, "Cache Miss Ratio: {}", Percent(self.miss_ratio))
    }
}
