//! Simulation configuration
//!
//! Defaults reproduce the classic demo run: eleven random operations over
//! accounts 1 to 5 on a pool of five workers, depositing 1000 or
//! withdrawing 300 at a time.

use bankcache_core::config::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
use serde::{Deserialize, Serialize};

/// Upper bound on simulation worker threads
pub const MAX_WORKERS: usize = 256;

/// Workload shape for `simulation::run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of random operations to issue
    pub operations: usize,
    /// Size of the worker pool
    pub workers: usize,
    /// Ids the driver picks from; ids absent from the store exercise the not-found path
    pub account_ids: Vec<u64>,
    /// Amount of each deposit
    pub deposit_amount: f64,
    /// Amount of each withdrawal
    pub withdraw_amount: f64,
    /// Fixed seed for a reproducible operation sequence
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            operations: 11,
            workers: 5,
            account_ids: vec![1, 2, 3, 4, 5],
            deposit_amount: 1000.0,
            withdraw_amount: 300.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Same workload with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Validator for SimulationConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_range(self.workers, 1, MAX_WORKERS, "workers")?;

        if self.account_ids.is_empty() && self.operations > 0 {
            return Err(ConfigurationError::Conflict(
                "operations requested but no account ids to pick from".to_string(),
            ));
        }

        for (name, amount) in [
            ("deposit_amount", self.deposit_amount),
            ("withdraw_amount", self.withdraw_amount),
        ] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ConfigurationError::InvalidParameter(format!(
                    "{name} must be a non-negative finite amount, got {amount}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_shapes() {
        let no_workers = SimulationConfig {
            workers: 0,
            ..SimulationConfig::default()
        };
        assert!(no_workers.validate().is_err());

        let no_ids = SimulationConfig {
            account_ids: Vec::new(),
            ..SimulationConfig::default()
        };
        assert!(matches!(no_ids.validate(), Err(ConfigurationError::Conflict(_))));

        let negative = SimulationConfig {
            withdraw_amount: -1.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));
    }
}
