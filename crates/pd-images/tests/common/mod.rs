#![allow(dead_code)]

use pd_core::{BREED_PLACEHOLDER_SIZE, BreedInfo, placeholder_image_url};
use pd_images::{BreedRecognizer, ImageStore, RecognitionError};
use pd_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Image store over a fresh in-memory store of the given capacity.
pub fn create_image_store(capacity: Option<usize>) -> (Arc<ImageStore>, Arc<MemoryStore>) {
    let store = Arc::new(match capacity {
        Some(bytes) => MemoryStore::with_capacity(bytes),
        None => MemoryStore::new(),
    });
    (Arc::new(ImageStore::new(store.clone())), store)
}

pub fn payload(len: usize) -> String {
    "x".repeat(len)
}

pub fn sample_breed(name: &str) -> BreedInfo {
    BreedInfo {
        breed_name: name.to_string(),
        description: "Heat tolerant dairy breed".to_string(),
        origin: "Gujarat".to_string(),
        characteristics: vec!["Domed forehead".to_string()],
        confidence_score: 92.0,
        confidence_reasoning: "Ear shape".to_string(),
        image_url: placeholder_image_url(name, BREED_PLACEHOLDER_SIZE),
        lifespan: "12-15 years".to_string(),
        dietary_needs: "Green fodder".to_string(),
        common_diseases: vec!["Mastitis".to_string()],
        temperament: "Docile".to_string(),
        milk_yield: "1200-1800 L".to_string(),
        draught_capacity: "Moderate".to_string(),
    }
}

/// Recognizer that replays a fixed answer and records what it was shown.
pub struct MockRecognizer {
    answer: fn() -> Result<BreedInfo, RecognitionError>,
    pub calls: Mutex<Vec<(usize, String)>>,
}

impl MockRecognizer {
    pub fn new(answer: fn() -> Result<BreedInfo, RecognitionError>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BreedRecognizer for MockRecognizer {
    async fn identify(&self, image: &[u8], mime: &str) -> Result<BreedInfo, RecognitionError> {
        self.calls
            .lock()
            .unwrap()
            .push((image.len(), mime.to_string()));
        (self.answer)()
    }
}

/// Store whose writes always fail with a non-quota error.
#[derive(Default)]
pub struct BrokenStore {
    inner: MemoryStore,
}

impl KeyValueStore for BrokenStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::lock_poisoned())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.inner.keys()
    }
}
