use crate::{KeyValueStore, MemoryStore, entry_size};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_value_when_set_then_get_returns_it() {
    let store = MemoryStore::new();

    store.set("a", "1").unwrap();

    assert_that!(store.get("a").unwrap(), some(eq("1")));
    assert_that!(store.get("b").unwrap(), none());
}

#[test]
fn given_existing_key_when_set_then_replaced() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();

    store.set("a", "22").unwrap();

    assert_that!(store.get("a").unwrap(), some(eq("22")));
    assert_that!(store.len().unwrap(), eq(1));
    assert_that!(store.used_bytes().unwrap(), eq(3));
}

#[test]
fn given_absent_key_when_remove_then_ok() {
    let store = MemoryStore::new();

    assert_that!(store.remove("missing"), ok(anything()));
    assert_that!(store.is_empty().unwrap(), eq(true));
}

#[test]
fn given_capacity_when_write_exceeds_it_then_quota_exceeded_and_unchanged() {
    // Given: 10 bytes of room, 6 already used
    let store = MemoryStore::with_capacity(10);
    store.set("ab", "cdef").unwrap();

    // When
    let result = store.set("gh", "ijk");

    // Then
    let err = result.unwrap_err();
    assert_that!(err.is_quota_exceeded(), eq(true));
    assert_that!(store.get("gh").unwrap(), none());
    assert_that!(store.used_bytes().unwrap(), eq(6));
}

#[test]
fn given_full_store_when_replacing_with_smaller_value_then_allowed() {
    let store = MemoryStore::with_capacity(6);
    store.set("ab", "cdef").unwrap();

    store.set("ab", "c").unwrap();

    assert_that!(store.used_bytes().unwrap(), eq(3));
}

#[test]
fn given_non_ascii_value_when_charged_then_counts_utf16_units() {
    assert_that!(entry_size("k", "गिर"), eq(4));
    assert_that!(entry_size("k", "🐄"), eq(3));
}

proptest! {
    #[test]
    fn given_random_writes_and_removes_when_tracked_then_usage_matches_contents(
        ops in prop::collection::vec(("[a-d]", "[a-z]{0,8}", any::<bool>()), 0..40)
    ) {
        let store = MemoryStore::new();
        for (key, value, remove) in &ops {
            if *remove {
                store.remove(key).unwrap();
            } else {
                store.set(key, value).unwrap();
            }
        }

        let expected: usize = store
            .keys()
            .unwrap()
            .iter()
            .map(|k| entry_size(k, &store.get(k).unwrap().unwrap()))
            .sum();
        prop_assert_eq!(store.used_bytes().unwrap(), expected);
    }
}
