//! Accounts held by the backing store and handed out by the cache.

pub mod record;

pub use record::{Account, AccountSnapshot};
