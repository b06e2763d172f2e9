//! Concurrent workload driver
//!
//! Draws a random operation sequence up front, feeds it through a bounded
//! channel to a fixed pool of worker threads and joins every worker before
//! reporting. Rejections and unknown accounts are tallied; a fatal error in
//! any worker fails the run.

use std::fmt;
use std::thread;

use bankcache_core::config::Validator;
use bankcache_core::{CacheStatsSnapshot, Result};
use crossbeam_channel::Receiver;
use serde::Serialize;

use super::config::SimulationConfig;
use crate::BankCache;

/// Account operation issued by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdraw,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
        }
    }
}

/// One unit of work for the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub account_id: u64,
    pub operation: Operation,
}

/// Outcome counts of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub deposits: u64,
    pub withdrawals: u64,
    /// Operations refused without changing a balance
    pub rejected: u64,
    /// Operations on ids unknown to the store
    pub not_found: u64,
    /// Cache statistics after every worker finished
    pub stats: CacheStatsSnapshot,
}

impl SimulationReport {
    /// Operations executed, whatever their outcome
    #[must_use]
    pub fn total(&self) -> u64 {
        self.deposits + self.withdrawals + self.rejected + self.not_found
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deposits: {}", self.deposits)?;
        writeln!(f, "Withdrawals: {}", self.withdrawals)?;
        writeln!(f, "Rejected: {}", self.rejected)?;
        writeln!(f, "Account not found: {}", self.not_found)?;
        write!(f, "{}", self.stats)
    }
}

#[derive(Debug, Default)]
struct Tally {
    deposits: u64,
    withdrawals: u64,
    rejected: u64,
    not_found: u64,
}

impl Tally {
    fn merge(&mut self, other: &Tally) {
        self.deposits += other.deposits;
        self.withdrawals += other.withdrawals;
        self.rejected += other.rejected;
        self.not_found += other.not_found;
    }
}

/// Draw the operation sequence for `config`
///
/// An even draw from `0..10` is a deposit, an odd one a withdrawal.
#[must_use]
pub fn plan(config: &SimulationConfig) -> Vec<Job> {
    if config.account_ids.is_empty() {
        return Vec::new();
    }

    let mut rng = config
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

    (0..config.operations)
        .map(|_| {
            let account_id = config.account_ids[rng.usize(..config.account_ids.len())];
            let operation = if rng.u32(0..10) % 2 == 0 {
                Operation::Deposit
            } else {
                Operation::Withdraw
            };
            Job {
                account_id,
                operation,
            }
        })
        .collect()
}

/// Run a randomized workload against `bank`
///
/// # Errors
///
/// - `Error::Configuration` if `config` does not validate
/// - `Error::LockPoisoned` if any worker hits a poisoned lock
pub fn run(bank: &BankCache, config: &SimulationConfig) -> Result<SimulationReport> {
    execute(bank, config, plan(config))
}

/// Run a prepared job list against `bank` on `config.workers` threads
///
/// # Errors
///
/// - `Error::Configuration` if `config` does not validate
/// - `Error::LockPoisoned` if any worker hits a poisoned lock
pub fn execute(bank: &BankCache, config: &SimulationConfig, jobs: Vec<Job>) -> Result<SimulationReport> {
    config.validate()?;

    tracing::info!(
        target: "bankcache::simulation",
        operations = jobs.len(),
        workers = config.workers,
        "Starting bank operations"
    );

    let (sender, receiver) = crossbeam_channel::bounded::<Job>(config.workers);

    let results: Vec<Result<Tally>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.workers)
            .map(|worker| {
                let receiver = receiver.clone();
                scope.spawn(move || work(worker, bank, config, &receiver))
            })
            .collect();
        // Workers hold the only receivers, so sends fail fast if every worker quit
        drop(receiver);

        for job in jobs {
            if sender.send(job).is_err() {
                break;
            }
        }
        drop(sender);

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut tally = Tally::default();
    for result in results {
        tally.merge(&result?);
    }

    let report = SimulationReport {
        deposits: tally.deposits,
        withdrawals: tally.withdrawals,
        rejected: tally.rejected,
        not_found: tally.not_found,
        stats: bank.stats(),
    };

    tracing::info!(
        target: "bankcache::simulation",
        deposits = report.deposits,
        withdrawals = report.withdrawals,
        rejected = report.rejected,
        not_found = report.not_found,
        hits = report.stats.hits,
        misses = report.stats.misses,
        "Bank operations finished"
    );

    Ok(report)
}

fn work(worker: usize, bank: &BankCache, config: &SimulationConfig, jobs: &Receiver<Job>) -> Result<Tally> {
    let mut tally = Tally::default();

    for job in jobs {
        let result = match job.operation {
            Operation::Deposit => bank.deposit(job.account_id, config.deposit_amount),
            Operation::Withdraw => bank.withdraw(job.account_id, config.withdraw_amount),
        };

        match result {
            Ok(balance) => {
                match job.operation {
                    Operation::Deposit => tally.deposits += 1,
                    Operation::Withdraw => tally.withdrawals += 1,
                }
                tracing::debug!(
                    target: "bankcache::simulation",
                    worker = worker,
                    account_id = job.account_id,
                    operation = job.operation.as_str(),
                    balance = balance,
                    outcome = "applied",
                    "Operation applied"
                );
            }
            Err(err) if err.is_not_found() => {
                tally.not_found += 1;
                tracing::debug!(
                    target: "bankcache::simulation",
                    worker = worker,
                    account_id = job.account_id,
                    operation = job.operation.as_str(),
                    outcome = "not_found",
                    "Account not found"
                );
            }
            Err(err) if err.is_rejection() => {
                tally.rejected += 1;
                tracing::debug!(
                    target: "bankcache::simulation",
                    worker = worker,
                    account_id = job.account_id,
                    operation = job.operation.as_str(),
                    error = %err,
                    outcome = "rejected",
                    "Operation rejected"
                );
            }
            Err(err) => {
                tracing::error!(
                    target: "bankcache::simulation",
                    worker = worker,
                    error = %err,
                    "Worker stopping on fatal error"
                );
                return Err(err);
            }
        }
    }

    Ok(tally)
}
