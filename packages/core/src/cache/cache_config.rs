//! Cache configuration and preset policies
//!
//! Provides `CacheConfig` for configuring the bounded account cache:
//! how many accounts it may hold and which entry it gives up when full.

use serde::{Deserialize, Serialize};

use crate::config::validation::{ConfigDefaults, ConfigResult, ConfigValidator, Validator};

/// Which resident entry is removed when an admission finds the cache full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Evict the entry admitted earliest; hits do not change the order
    #[default]
    Fifo,
    /// Evict the entry whose last hit or admission is oldest
    Lru,
}

impl EvictionPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lru => "lru",
        }
    }
}

/// Cache configuration and limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of resident accounts
    pub capacity: usize,
    /// Entry selection when the cache is full
    pub eviction_policy: EvictionPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: ConfigDefaults::DEFAULT_CAPACITY,
            eviction_policy: EvictionPolicy::Fifo,
        }
    }
}

impl CacheConfig {
    /// FIFO cache holding at most `capacity` accounts
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            eviction_policy: EvictionPolicy::Fifo,
        }
    }

    /// LRU cache holding at most `capacity` accounts
    #[must_use]
    pub fn lru(capacity: usize) -> Self {
        Self {
            capacity,
            eviction_policy: EvictionPolicy::Lru,
        }
    }
}

impl Validator for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_capacity(self.capacity, "cache capacity")
    }
}
