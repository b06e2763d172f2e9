//! Account record with per-account serialized balance mutation
//!
//! Every balance read-modify-write happens under the account's own mutex,
//! so concurrent deposits and withdrawals on one account never lose an
//! update while operations on different accounts never contend.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cached domain entity shared between the backing store and the cache
#[derive(Debug)]
pub struct Account {
    /// Lookup key
    id: u64,
    /// Account number, distinct from the lookup key
    account_number: u64,
    /// Account holder name
    owner: String,
    /// Current balance, guarded per account
    balance: Mutex<f64>,
}

/// Point-in-time copy of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: u64,
    pub account_number: u64,
    pub owner: String,
    pub balance: f64,
}

impl Account {
    /// Create a new account
    pub fn new(id: u64, account_number: u64, owner: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            account_number,
            owner: owner.into(),
            balance: Mutex::new(balance),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if a previous holder of the balance lock panicked.
    pub fn balance(&self) -> Result<f64> {
        Ok(*self.lock_balance()?)
    }

    /// Add `amount` to the balance and return the new balance
    ///
    /// # Errors
    ///
    /// - `Error::InvalidAmount` if `amount` is negative, NaN or infinite
    /// - `Error::LockPoisoned` if the balance lock is poisoned
    pub fn deposit(&self, amount: f64) -> Result<f64> {
        self.check_amount("deposit", amount)?;

        let mut balance = self.lock_balance()?;
        *balance += amount;

        tracing::debug!(
            target: "bankcache::account",
            account_id = self.id,
            operation = "deposit",
            amount = amount,
            balance = *balance,
            outcome = "accepted",
            "Deposit applied"
        );

        Ok(*balance)
    }

    /// Subtract `amount` from the balance and return the new balance
    ///
    /// The balance is left untouched when it does not cover `amount`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidAmount` if `amount` is negative, NaN or infinite
    /// - `Error::InsufficientFunds` if `amount` exceeds the current balance
    /// - `Error::LockPoisoned` if the balance lock is poisoned
    pub fn withdraw(&self, amount: f64) -> Result<f64> {
        self.check_amount("withdraw", amount)?;

        let mut balance = self.lock_balance()?;
        if *balance < amount {
            tracing::warn!(
                target: "bankcache::account",
                account_id = self.id,
                operation = "withdraw",
                amount = amount,
                balance = *balance,
                outcome = "insufficient_funds",
                "Withdrawal rejected"
            );
            return Err(Error::InsufficientFunds {
                account_id: self.id,
                requested: amount,
                available: *balance,
            });
        }

        *balance -= amount;

        tracing::debug!(
            target: "bankcache::account",
            account_id = self.id,
            operation = "withdraw",
            amount = amount,
            balance = *balance,
            outcome = "accepted",
            "Withdrawal applied"
        );

        Ok(*balance)
    }

    /// Copy the account's current state
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the balance lock is poisoned.
    pub fn snapshot(&self) -> Result<AccountSnapshot> {
        Ok(AccountSnapshot {
            id: self.id,
            account_number: self.account_number,
            owner: self.owner.clone(),
            balance: self.balance()?,
        })
    }

    fn check_amount(&self, operation: &'static str, amount: f64) -> Result<()> {
        if amount.is_finite() && amount >= 0.0 {
            return Ok(());
        }

        tracing::warn!(
            target: "bankcache::account",
            account_id = self.id,
            operation = operation,
            amount = amount,
            outcome = "invalid_amount",
            "Operation rejected"
        );
        Err(Error::InvalidAmount { amount })
    }

    fn lock_balance(&self) -> Result<MutexGuard<'_, f64>> {
        match self.balance.lock() {
            Ok(guard) => Ok(guard),
            Err(_poisoned) => {
                tracing::error!(
                    target: "bankcache::account",
                    account_id = self.id,
                    "Balance mutex poisoned"
                );
                Err(Error::LockPoisoned {
                    resource: "account balance",
                })
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendering should not fail on a poisoned lock, the last written value is still meaningful
        let balance = match self.balance.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        };
        write!(
            f,
            "Id: {}, Account Number: {}, Account Holder: {}, Balance: {}",
            self.id, self.account_number, self.owner, balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_statement_layout() {
        let account = Account::new(1, 10, "Vishnu", 24000.0);
        assert_eq!(
            account.to_string(),
            "Id: 1, Account Number: 10, Account Holder: Vishnu, Balance: 24000"
        );
    }

    #[test]
    fn zero_amount_is_accepted() {
        let account = Account::new(7, 7, "Zero", 5.0);
        assert_eq!(account.deposit(0.0).unwrap(), 5.0);
        assert_eq!(account.withdraw(0.0).unwrap(), 5.0);
    }

    #[test]
    fn non_finite_amounts_are_invalid() {
        let account = Account::new(7, 7, "Zero", 5.0);
        assert!(matches!(account.deposit(f64::NAN), Err(Error::InvalidAmount { .. })));
        assert!(matches!(account.withdraw(f64::INFINITY), Err(Error::InvalidAmount { .. })));
        assert_eq!(account.balance().unwrap(), 5.0);
    }
}
