use pd_images::ImageStore;
use pd_storage::{KeyValueStore, MemoryStore, entry_size};

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

proptest! {
    #[test]
    fn given_stored_images_when_store_full_then_smallest_timestamp_evicted(
        timestamps in prop::collection::btree_set(1i64..10_000_000, 1..12),
    ) {
        // Given: a store filled exactly with the existing images
        let keys: Vec<String> = timestamps
            .iter()
            .map(|t| format!("pashudhan_image_{t}"))
            .collect();
        let used: usize = keys.iter().map(|k| entry_size(k, "p")).sum();
        let store = Arc::new(MemoryStore::with_capacity(used + 40));
        for key in &keys {
            store.set(key, "p").unwrap();
        }
        let images = ImageStore::new(store.clone());

        // When: the new entry (29 + 12 units) only fits after an eviction
        let saved = images.save_image("pppppppppppp").unwrap();

        // Then
        let oldest = format!("pashudhan_image_{}", timestamps.iter().next().unwrap());
        let remaining: BTreeSet<String> = store.keys().unwrap().into_iter().collect();
        prop_assert!(!remaining.contains(&oldest));
        prop_assert!(remaining.contains(saved.as_str()));
        prop_assert_eq!(remaining.len(), keys.len());
    }
}
