//! Property tests for the Lei Chain Table.

use crate::data_structures::lei_chain_table::{polynomial_hash, LeiChainTable};
use crate::tests::key_strategy;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hash_is_within_capacity(key in key_strategy(), capacity in 1usize..10_000) {
        let index = polynomial_hash(&key, capacity).unwrap();
        prop_assert!(index < capacity);
    }

    #[test]
    fn hash_is_deterministic(key in key_strategy(), capacity in 1usize..10_000) {
        let table = LeiChainTable::new(capacity).unwrap();
        prop_assert_eq!(table.hash(&key), table.hash(&key));
        prop_assert_eq!(table.hash(&key), polynomial_hash(&key, capacity).unwrap());
    }

    #[test]
    fn inserted_key_is_found(key in key_strategy(), value in ".*", capacity in 1usize..512) {
        let mut table = LeiChainTable::new(capacity).unwrap();
        table.insert(key.clone(), value.clone());
        prop_assert_eq!(table.lookup(&key), Some(value.as_str()));
    }

    #[test]
    fn first_write_wins(key in key_strategy(), first in ".*", second in ".*") {
        let mut table = LeiChainTable::new(100).unwrap();
        table.insert(key.clone(), first.clone());
        table.insert(key.clone(), second);
        prop_assert_eq!(table.lookup(&key), Some(first.as_str()));
        prop_assert_eq!(table.len(), 2);
    }

    #[test]
    fn every_distinct_key_survives_collisions(
        keys in proptest::collection::hash_set(key_strategy(), 1..64),
        capacity in 1usize..8,
    ) {
        let mut table = LeiChainTable::new(capacity).unwrap();
        for key in &keys {
            table.insert(key.clone(), format!("def-{key}"));
        }

        prop_assert_eq!(table.len(), keys.len());
        for key in &keys {
            let expected = format!("def-{key}");
            prop_assert_eq!(table.lookup(key), Some(expected.as_str()));
        }
    }

    #[test]
    fn entries_stay_in_their_bucket(keys in proptest::collection::vec(key_strategy(), 0..64)) {
        let mut table = LeiChainTable::new(13).unwrap();
        for key in &keys {
            table.insert(key.clone(), "v");
        }

        let total: usize = (0..13).filter_map(|i| table.chain_len(i)).sum();
        prop_assert_eq!(total, keys.len());
        for index in 0..13 {
            for entry in table.chain(index).unwrap() {
                prop_assert_eq!(table.hash(entry.key()), index);
            }
        }
    }

    #[test]
    fn lookup_is_idempotent(
        keys in proptest::collection::vec(key_strategy(), 0..16),
        probe in key_strategy(),
    ) {
        let mut table = LeiChainTable::new(10).unwrap();
        for key in &keys {
            table.insert(key.clone(), key.clone());
        }

        let first = table.lookup(&probe).map(str::to_owned);
        let second = table.lookup(&probe).map(str::to_owned);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn missing_key_is_not_found(
        keys in proptest::collection::hash_set(r"[a-z]{1,8}", 0..32),
        probe in r"[A-Z]{1,8}",
    ) {
        let mut table = LeiChainTable::new(50).unwrap();
        for key in &keys {
            table.insert(key.clone(), "x");
        }
        prop_assert_eq!(table.lookup(&probe), None);
    }
}

#[test]
fn test_colliding_keys_both_retrievable() {
    let mut table = LeiChainTable::new(10).unwrap();
    assert_eq!(table.hash("a"), table.hash("k"));

    table.insert("a", "first letter");
    table.insert("k", "eleventh letter");

    assert_eq!(table.lookup("a"), Some("first letter"));
    assert_eq!(table.lookup("k"), Some("eleventh letter"));
    assert_eq!(table.chain_len(table.hash("a")), Some(2));
}

#[test]
fn test_insert_is_not_a_resize() {
    let mut table = LeiChainTable::new(4).unwrap();
    for i in 0..1_000 {
        table.insert(format!("word{i}"), format!("definition {i}"));
    }

    assert_eq!(table.capacity(), 4);
    assert_eq!(table.len(), 1_000);
    assert_eq!(table.lookup("word999"), Some("definition 999"));
    assert!(table.stats().longest_chain >= 250);
}
