//! # bankcache core
//!
//! Bounded, read-through account cache for concurrent lookups against a
//! slower backing store.
//!
//! ## Features
//!
//! - **Fixed capacity** with explicit FIFO or LRU eviction
//! - **Atomic admission**: size check, eviction and insertion under one lock
//! - **Hit/miss/eviction counters** on cache-padded atomics
//! - **Per-account locking** so balance updates never lose writes and
//!   unrelated accounts never contend
//! - **Structured `tracing` events** for every lookup outcome and mutation
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bankcache_core::{AccountCache, CacheConfig, SeededStore};
//!
//! let cache = AccountCache::new(CacheConfig::default(), Arc::new(SeededStore::demo()))
//!     .expect("default configuration is valid");
//!
//! let account = cache.get(1).expect("lock").expect("seeded account");
//! account.deposit(1000.0).expect("valid amount");
//! assert_eq!(account.balance().expect("lock"), 25000.0);
//!
//! assert!(cache.get(1).expect("lock").is_some());
//! assert_eq!(cache.stats().hits, 1);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod account;
pub mod cache;
pub mod config;
pub mod error;
pub mod store;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
