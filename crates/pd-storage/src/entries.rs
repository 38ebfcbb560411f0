use crate::{StorageError, StorageResult, entry_size};

use std::collections::BTreeMap;

/// Entry map with running usage accounting shared by the backends.
#[derive(Debug, Default)]
pub(crate) struct Entries {
    map: BTreeMap<String, String>,
    used: usize,
}

impl Entries {
    pub(crate) fn from_map(map: BTreeMap<String, String>) -> Self {
        let used = map.iter().map(|(k, v)| entry_size(k, v)).sum();
        Self { map, used }
    }

    pub(crate) fn map(&self) -> &BTreeMap<String, String> {
        &self.map
    }

    pub(crate) fn used(&self) -> usize {
        self.used
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// Inserts within `capacity`, returning the replaced value.
    #[track_caller]
    pub(crate) fn insert(
        &mut self,
        key: &str,
        value: &str,
        capacity: Option<usize>,
    ) -> StorageResult<Option<String>> {
        let old_size = self
            .map
            .get(key)
            .map(|old| entry_size(key, old))
            .unwrap_or(0);
        let new_size = entry_size(key, value);
        let base = self.used - old_size;

        if let Some(capacity) = capacity
            && base + new_size > capacity
        {
            return Err(StorageError::quota_exceeded(
                key,
                new_size,
                capacity.saturating_sub(base),
            ));
        }

        self.used = base + new_size;
        Ok(self.map.insert(key.to_string(), value.to_string()))
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.map.remove(key);
        if let Some(ref value) = removed {
            self.used -= entry_size(key, value);
        }
        removed
    }

    /// Puts back the state preceding an insert or remove of `key`.
    pub(crate) fn restore(&mut self, key: &str, previous: Option<String>) {
        self.remove(key);
        if let Some(value) = previous {
            self.used += entry_size(key, &value);
            self.map.insert(key.to_string(), value);
        }
    }
}
