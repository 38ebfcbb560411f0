#![allow(dead_code)]

use pd_auth::{AuthService, CredentialHasher, HashParams, PasswordResetNotifier, SESSION_KEY};
use pd_core::User;
use pd_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult, entry_size};

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Cheapest Argon2 parameters accepted by the library.
pub fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(HashParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid hash params")
}

/// Zero-latency service over a fresh in-memory store.
pub fn create_test_service() -> (AuthService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = AuthService::new(store.clone(), fast_hasher(), Duration::ZERO);
    (service, store)
}

/// Service sharing an existing store.
pub fn service_over(store: Arc<dyn KeyValueStore>) -> AuthService {
    AuthService::new(store, fast_hasher(), Duration::ZERO)
}

/// Notifier that remembers every request it received.
#[derive(Default)]
pub struct RecordingNotifier {
    pub requests: Mutex<Vec<(String, Option<String>)>>,
}

impl PasswordResetNotifier for RecordingNotifier {
    fn reset_requested(&self, email: &str, account: Option<&User>) {
        self.requests
            .lock()
            .unwrap()
            .push((email.to_string(), account.map(|u| u.id.clone())));
    }
}

/// Store that refuses every session write as if it were full.
pub struct SessionRefusingStore {
    pub inner: Arc<MemoryStore>,
}

impl SessionRefusingStore {
    pub fn over(inner: Arc<MemoryStore>) -> Arc<Self> {
        Arc::new(Self { inner })
    }
}

impl KeyValueStore for SessionRefusingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if key == SESSION_KEY {
            return Err(StorageError::quota_exceeded(key, entry_size(key, value), 0));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.inner.keys()
    }
}
