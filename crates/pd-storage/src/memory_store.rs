use crate::entries::Entries;
use crate::{KeyValueStore, StorageError, StorageResult};

use std::sync::{Mutex, MutexGuard};

/// In-process store, optionally limited to a byte capacity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Unlimited store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes beyond `capacity_bytes`.
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
            capacity: Some(capacity_bytes),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Bytes currently charged against the capacity.
    pub fn used_bytes(&self) -> StorageResult<usize> {
        Ok(self.lock()?.used())
    }

    #[track_caller]
    fn lock(&self) -> StorageResult<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::lock_poisoned())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock()?.insert(key, value, self.capacity)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.lock()?.keys())
    }
}
