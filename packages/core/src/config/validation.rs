//! Core Configuration Utilities
//!
//! Common configuration patterns, validation, and defaults.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidCapacity` - if a capacity is zero or exceeds limits
    /// - `InvalidParameter` - if parameters are outside valid ranges
    /// - `Conflict` - if configuration settings conflict with each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a bounded capacity
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCapacity` if:
    /// - The capacity is zero
    /// - The capacity exceeds `ConfigDefaults::MAX_CAPACITY`
    pub fn validate_capacity(capacity: usize, name: &str) -> ConfigResult<()> {
        if capacity == 0 {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} cannot be zero"
            )));
        }

        if capacity > ConfigDefaults::MAX_CAPACITY {
            return Err(ConfigurationError::InvalidCapacity(format!(
                "{name} cannot exceed {}",
                ConfigDefaults::MAX_CAPACITY
            )));
        }

        Ok(())
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_CAPACITY: usize = 3;
    pub const MAX_CAPACITY: usize = 1_000_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_bounds() {
        assert!(ConfigValidator::validate_capacity(1, "capacity").is_ok());
        assert!(ConfigValidator::validate_capacity(ConfigDefaults::MAX_CAPACITY, "capacity").is_ok());
        assert_eq!(
            ConfigValidator::validate_capacity(0, "capacity"),
            Err(ConfigurationError::InvalidCapacity(
                "capacity cannot be zero".to_string()
            ))
        );
        assert!(
            ConfigValidator::validate_capacity(ConfigDefaults::MAX_CAPACITY + 1, "capacity").is_err()
        );
    }

    #[test]
    fn range_is_inclusive() {
        assert!(ConfigValidator::validate_range(5, 1, 5, "workers").is_ok());
        let err = ConfigValidator::validate_range(0, 1, 5, "workers").unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration parameter: workers must be between 1 and 5, got 0");
    }
}
