//! Synchronous key-value storage backing the record-keeping core.
//!
//! Mirrors the browser storage primitive: string keys, string values,
//! an enumerable key list and a byte quota. There are no transactions.

mod entries;
pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use key_value_store::{KeyValueStore, entry_size};
pub use memory_store::MemoryStore;

/// Capacity of browser local storage (5 MiB).
pub const DEFAULT_CAPACITY_BYTES: usize = 5 * 1024 * 1024;

#[cfg(test)]
mod tests;
