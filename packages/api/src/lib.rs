//! bankcache Public API
//!
//! Bounded read-through account cache with a fluent builder, account-level
//! convenience operations and a concurrent workload simulation.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::Arc;

pub mod builder;
pub mod simulation;

// Re-export all public API components
pub use builder::BankCacheBuilder;

// Re-export important types from the core package
pub use bankcache_core::{
    Account, AccountCache, AccountSnapshot, AccountStore, CacheConfig, CacheStatsSnapshot, Error,
    EvictionPolicy, Result, SeededStore,
};

/// Account cache facade with id-based operations
#[derive(Debug)]
pub struct BankCache {
    pub(crate) cache: AccountCache,
}

impl BankCache {
    /// Create a new builder
    ///
    /// Shorthand for `BankCacheBuilder::new()`
    #[must_use]
    pub fn builder() -> BankCacheBuilder {
        BankCacheBuilder::new()
    }

    /// Three-entry FIFO cache over the demo accounts
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the signature matches `build`.
    pub fn demo() -> Result<Self> {
        BankCacheBuilder::new().build()
    }

    /// The underlying cache
    #[must_use]
    pub fn cache(&self) -> &AccountCache {
        &self.cache
    }

    /// Look up an account through the cache
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no account has this id
    /// - `Error::LockPoisoned` if the cache lock is poisoned
    pub fn account(&self, id: u64) -> Result<Arc<Account>> {
        self.cache.fetch(id)
    }

    /// Deposit into the account with `id` and return its new balance
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no account has this id
    /// - `Error::InvalidAmount` if `amount` is negative or not finite
    /// - `Error::LockPoisoned` if a lock is poisoned
    pub fn deposit(&self, id: u64, amount: f64) -> Result<f64> {
        self.account(id)?.deposit(amount)
    }

    /// Withdraw from the account with `id` and return its new balance
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no account has this id
    /// - `Error::InvalidAmount` if `amount` is negative or not finite
    /// - `Error::InsufficientFunds` if the balance does not cover `amount`
    /// - `Error::LockPoisoned` if a lock is poisoned
    pub fn withdraw(&self, id: u64, amount: f64) -> Result<f64> {
        self.account(id)?.withdraw(amount)
    }

    /// Current cache statistics
    #[must_use]
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.cache.stats()
    }
}
