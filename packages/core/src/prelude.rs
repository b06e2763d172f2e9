//! Canonical types re-exported at the crate root

pub use crate::account::{Account, AccountSnapshot};
pub use crate::cache::{AccountCache, CacheConfig, CacheStats, CacheStatsSnapshot, EvictionPolicy};
pub use crate::config::{ConfigResult, ConfigurationError, Validator};
pub use crate::error::{Error, Result};
pub use crate::store::{AccountStore, SeededStore};
