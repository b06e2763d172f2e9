//! Configuration validation shared by the cache and its callers.

pub mod validation;

pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
