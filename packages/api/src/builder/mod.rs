//! Builder API for `BankCache`

pub mod core;

pub use self::core::BankCacheBuilder;
