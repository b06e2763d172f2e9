//! Bank operations simulation
//!
//! Runs the classic workload: random deposits and withdrawals over five
//! demo accounts from a pool of worker threads, then prints each account
//! and the cache statistics.
//!
//! ```text
//! RUST_LOG=bankcache=debug cargo run -p bankcache --example bank_simulation
//! ```

use bankcache::{AccountStore, BankCache};
use bankcache::simulation::{self, SimulationConfig};

fn main() {
    env_logger::init();

    let bank = match BankCache::demo() {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("Failed to build cache: {e}");
            std::process::exit(1);
        }
    };

    let config = match std::env::args().nth(1).map(|seed| seed.parse::<u64>()) {
        Some(Ok(seed)) => SimulationConfig::seeded(seed),
        Some(Err(e)) => {
            eprintln!("Seed must be an unsigned integer: {e}");
            std::process::exit(2);
        }
        None => SimulationConfig::default(),
    };

    println!("Starting Bank Operations: ");
    let report = match simulation::run(&bank, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            std::process::exit(1);
        }
    };

    for id in &config.account_ids {
        if let Some(account) = bank.cache().store().get(*id) {
            println!("{account}");
        }
    }
    println!();
    println!("{report}");
}
