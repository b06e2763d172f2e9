//! Bounded account cache with explicit FIFO/LRU eviction
//!
//! This module provides the read-through cache that sits in front of an
//! `AccountStore`:
//! - A single coarse mutex around entries, so check-evict-insert is atomic
//! - Cache-padded atomic counters for hits, misses and evictions
//! - Deterministic eviction order driven by a logical clock
//! - Shared `Arc<Account>` handles, never copies of the stored account

pub mod account_cache;
pub mod cache_config;
pub mod cache_stats;

pub use account_cache::AccountCache;
pub use cache_config::{CacheConfig, EvictionPolicy};
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
