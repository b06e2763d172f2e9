use std::sync::Arc;

use bankcache::{Account, BankCache, CacheConfig, Error, EvictionPolicy, SeededStore};

#[test]
fn test_demo_bank_defaults() {
    let bank = BankCache::demo().unwrap();
    let stats = bank.stats();

    assert_eq!(stats.capacity, 3);
    assert_eq!(stats.size, 0);
    assert_eq!(bank.cache().config().eviction_policy, EvictionPolicy::Fifo);
    assert_eq!(bank.cache().store().len(), 5);
}

#[test]
fn test_builder_settings_are_applied() {
    let bank = BankCache::builder()
        .capacity(2)
        .eviction_policy(EvictionPolicy::Lru)
        .accounts([
            Account::new(1, 501, "Ada", 10.0),
            Account::new(2, 502, "Grace", 20.0),
            Account::new(3, 503, "Linus", 30.0),
        ])
        .build()
        .unwrap();

    assert_eq!(bank.cache().config(), &CacheConfig::lru(2));
    assert_eq!(bank.account(3).unwrap().owner(), "Linus");
    assert!(bank.account(4).unwrap_err().is_not_found());
}

#[test]
fn test_builder_rejects_zero_capacity() {
    let err = BankCache::builder().capacity(0).build().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_builder_uses_given_store() {
    let store = Arc::new(SeededStore::demo());
    let bank = BankCache::builder().store(store.clone()).build().unwrap();

    bank.deposit(1, 1000.0).unwrap();
    let direct = bankcache::AccountStore::get(store.as_ref(), 1).unwrap();
    assert_eq!(direct.balance().unwrap(), 25000.0);
}

#[test]
fn test_statement_sequence_through_facade() {
    let bank = BankCache::demo().unwrap();

    assert_eq!(bank.deposit(1, 1000.0).unwrap(), 25000.0);
    assert_eq!(bank.withdraw(1, 300.0).unwrap(), 24700.0);

    let err = bank.withdraw(1, 1_000_000.0).unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(bank.account(1).unwrap().balance().unwrap(), 24700.0);

    let stats = bank.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 3);
}

#[test]
fn test_unknown_account_operations() {
    let bank = BankCache::demo().unwrap();

    assert!(bank.deposit(999, 10.0).unwrap_err().is_not_found());
    assert!(bank.withdraw(999, 10.0).unwrap_err().is_not_found());

    let stats = bank.stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.size, 0);
}

#[test]
fn test_invalid_amount_through_facade() {
    let bank = BankCache::demo().unwrap();
    let err = bank.deposit(2, -10.0).unwrap_err();
    assert!(matches!(err, Error::InvalidAmount { .. }));
    assert_eq!(bank.account(2).unwrap().balance().unwrap(), 23450.0);
}

#[test]
fn test_config_from_json() {
    let config: CacheConfig =
        serde_json::from_str(r#"{ "capacity": 4, "eviction_policy": "lru" }"#).unwrap();
    assert_eq!(config, CacheConfig::lru(4));

    // Missing fields fall back to defaults
    let config: CacheConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CacheConfig::default());

    let bank = BankCache::builder().config(config).build().unwrap();
    assert_eq!(bank.stats().capacity, 3);
}

#[test]
fn test_stats_serialize() {
    let bank = BankCache::demo().unwrap();
    let empty = serde_json::to_value(bank.stats()).unwrap();
    assert!(empty["hit_ratio"].is_null());

    bank.account(1).unwrap();
    bank.account(1).unwrap();
    let json = serde_json::to_value(bank.stats()).unwrap();
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["hit_ratio"], 0.5);
    assert_eq!(json["miss_ratio"], 0.5);
}
