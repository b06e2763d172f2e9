use std::thread;

use bankcache_core::{Account, AccountSnapshot, Error};

#[test]
fn test_deposit_then_withdraw_sequence() {
    let account = Account::new(1, 1, "Vishnu", 24000.0);

    assert_eq!(account.deposit(1000.0).unwrap(), 25000.0);
    assert_eq!(account.withdraw(300.0).unwrap(), 24700.0);

    let err = account.withdraw(1_000_000.0).expect_err("overdraft must be rejected");
    assert!(err.is_rejection());
    match err {
        Error::InsufficientFunds {
            account_id,
            requested,
            available,
        } => {
            assert_eq!(account_id, 1);
            assert_eq!(requested, 1_000_000.0);
            assert_eq!(available, 24700.0);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(account.balance().unwrap(), 24700.0);
}

#[test]
fn test_withdraw_entire_balance() {
    let account = Account::new(2, 2, "Udaya", 23450.0);
    assert_eq!(account.withdraw(23450.0).unwrap(), 0.0);
    assert!(account.withdraw(0.01).is_err());
}

#[test]
fn test_negative_amounts_are_invalid() {
    let account = Account::new(3, 3, "Lalitha", 100.0);

    assert!(matches!(
        account.deposit(-5.0),
        Err(Error::InvalidAmount { amount }) if amount == -5.0
    ));
    assert!(matches!(account.withdraw(-5.0), Err(Error::InvalidAmount { .. })));
    assert_eq!(account.balance().unwrap(), 100.0);
}

#[test]
fn test_snapshot_copies_state() {
    let account = Account::new(4, 40, "Madhuri", 42350.0);
    let snapshot = account.snapshot().unwrap();
    account.deposit(50.0).unwrap();

    assert_eq!(
        snapshot,
        AccountSnapshot {
            id: 4,
            account_number: 40,
            owner: "Madhuri".to_string(),
            balance: 42350.0,
        }
    );

    let json = serde_json::to_value(account.snapshot().unwrap()).unwrap();
    assert_eq!(json["balance"], serde_json::json!(42400.0));
    assert_eq!(json["owner"], "Madhuri");
}

#[test]
fn test_concurrent_deposits_never_lose_updates() {
    let account = Account::new(9, 9, "Concurrent", 0.0);

    thread::scope(|scope| {
        for _ in 0..50 {
            scope.spawn(|| {
                account.deposit(100.0).unwrap();
            });
        }
    });

    assert_eq!(account.balance().unwrap(), 5000.0);
}

#[test]
fn test_concurrent_mixed_operations_balance() {
    let account = Account::new(10, 10, "Mixed", 1000.0);

    thread::scope(|scope| {
        for i in 0..40 {
            let account = &account;
            scope.spawn(move || {
                if i % 2 == 0 {
                    account.deposit(10.0).unwrap();
                } else {
                    account.withdraw(5.0).unwrap();
                }
            });
        }
    });

    // 20 deposits of 10 and 20 withdrawals of 5, none can overdraw
    assert_eq!(account.balance().unwrap(), 1100.0);
}

#[test]
fn test_concurrent_withdrawals_never_overdraw() {
    let account = Account::new(11, 11, "Contended", 1000.0);

    let accepted: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..30)
            .map(|_| scope.spawn(|| account.withdraw(100.0).is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|handle| usize::from(handle.join().unwrap()))
            .sum()
    });

    assert_eq!(accepted, 10);
    assert_eq!(account.balance().unwrap(), 0.0);
}
