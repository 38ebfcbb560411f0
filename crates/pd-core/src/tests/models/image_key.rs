use crate::{IMAGE_KEY_PREFIX, ImageKey};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_timestamp_when_from_timestamp_then_key_carries_prefix() {
    let key = ImageKey::from_timestamp(1_716_000_000_123);

    assert_that!(key.as_str(), eq("pashudhan_image_1716000000123"));
    assert_that!(key.timestamp(), eq(1_716_000_000_123));
}

#[test]
fn given_key_without_prefix_when_parsed_then_error() {
    let result = "https://example.com/cow.jpg".parse::<ImageKey>();

    assert_that!(result, err(anything()));
}

#[test]
fn given_unparsable_suffix_when_timestamp_then_zero() {
    assert_that!(ImageKey::timestamp_of("pashudhan_image_abc"), eq(0));
    assert_that!(ImageKey::timestamp_of("pashudhan_image_"), eq(0));
}

#[test]
fn given_trailing_garbage_when_timestamp_then_reads_leading_digits() {
    assert_that!(ImageKey::timestamp_of("pashudhan_image_42_old"), eq(42));
}

#[test]
fn given_non_image_json_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<ImageKey>("\"pashudhan_users\"");

    assert_that!(result, err(anything()));
}

proptest! {
    #[test]
    fn given_any_timestamp_when_round_tripped_through_key_then_preserved(ts in 0i64..i64::MAX) {
        let key = ImageKey::from_timestamp(ts);
        prop_assert!(ImageKey::is_image_key(key.as_str()));
        prop_assert!(key.as_str().starts_with(IMAGE_KEY_PREFIX));
        prop_assert_eq!(key.timestamp(), ts);
    }

    #[test]
    fn given_two_timestamps_when_keys_compared_by_timestamp_then_order_matches(
        a in 0i64..1_000_000_000_000,
        b in 0i64..1_000_000_000_000,
    ) {
        let ka = ImageKey::from_timestamp(a);
        let kb = ImageKey::from_timestamp(b);
        prop_assert_eq!(ka.timestamp().cmp(&kb.timestamp()), a.cmp(&b));
    }
}
