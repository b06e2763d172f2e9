//! Randomized concurrent workload against a `BankCache`
//!
//! - `config`: workload shape and validation
//! - `driver`: job planning, the worker pool and the run report

pub mod config;
pub mod driver;

pub use config::{MAX_WORKERS, SimulationConfig};
pub use driver::{Job, Operation, SimulationReport, execute, plan, run};
