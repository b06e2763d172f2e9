//! Account cache modules
//!
//! Bounded read-through cache of accounts with an explicit eviction order.
//!
//! The functionality is organized into logical modules:
//!
//! - `core`: AccountCache struct, construction and occupancy
//! - `operations`: lookup, read-through and admission
//! - `eviction`: FIFO/LRU victim selection

pub mod core;
pub mod eviction;
pub mod operations;

pub use self::core::AccountCache;
