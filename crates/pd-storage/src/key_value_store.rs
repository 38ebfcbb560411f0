use crate::StorageResult;

/// Synchronous string key-value storage.
///
/// Implementations use interior mutability so a single store can be shared
/// between services behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// Fails with [`StorageError::QuotaExceeded`](crate::StorageError::QuotaExceeded)
    /// when the write would exceed the store's capacity; the previous value
    /// is left untouched in that case.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn keys(&self) -> StorageResult<Vec<String>>;

    fn len(&self) -> StorageResult<usize> {
        Ok(self.keys()?.len())
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Bytes charged for one entry: key plus value, in UTF-16 code units.
pub fn entry_size(key: &str, value: &str) -> usize {
    key.encode_utf16().count() + value.encode_utf16().count()
}
