use crate::config::validation::ConfigurationError;

/// A Result alias where the Err case is `bankcache_core::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the account cache and the accounts it hands out.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key absent from both the cache and the backing store
    #[error("account {key} not found")]
    NotFound { key: u64 },

    /// Withdrawal larger than the current balance
    #[error("insufficient funds in account {account_id}: requested {requested}, available {available}")]
    InsufficientFunds {
        account_id: u64,
        requested: f64,
        available: f64,
    },

    /// Negative, NaN or infinite amount passed to deposit or withdraw
    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// A mutex guarding cache or account state was poisoned by a panicking holder
    #[error("lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
