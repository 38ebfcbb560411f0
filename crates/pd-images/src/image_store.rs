use crate::{ImageError, ImageResult};

use pd_core::{ANIMAL_PLACEHOLDER_SIZE, Animal, ImageKey, ImageReference, placeholder_image_url};
use pd_storage::KeyValueStore;

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use log::{debug, info, warn};

/// Image payloads kept in a key-value store under timestamped keys.
pub struct ImageStore {
    store: Arc<dyn KeyValueStore>,
    last_timestamp: Mutex<i64>,
}

impl ImageStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            last_timestamp: Mutex::new(0),
        }
    }

    /// Stores `payload` under a fresh key and returns the key.
    ///
    /// When the store refuses the write for lack of space, the image with
    /// the oldest key timestamp is evicted and the write is retried once.
    /// A second refusal fails with [`ImageError::StorageFull`].
    pub fn save_image(&self, payload: &str) -> ImageResult<ImageKey> {
        let key = self.next_key()?;

        match self.store.set(key.as_str(), payload) {
            Ok(()) => {
                debug!("Saved image {key}");
                return Ok(key);
            }
            Err(e) if e.is_quota_exceeded() => {
                warn!("Storage full saving {key}, evicting oldest image");
            }
            Err(e) => return Err(e.into()),
        }

        self.evict_oldest()?;

        match self.store.set(key.as_str(), payload) {
            Ok(()) => {
                info!("Saved image {key} after eviction");
                Ok(key)
            }
            Err(e) if e.is_quota_exceeded() => Err(ImageError::storage_full(key.as_str())),
            Err(e) => Err(e.into()),
        }
    }

    /// Payload stored under `key`, or `None` when absent or unreadable.
    pub fn get_image(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to read image {key}: {e}");
                None
            }
        }
    }

    /// Deletes an image. Keys outside the image namespace are ignored.
    pub fn remove_image(&self, key: &str) {
        if !ImageKey::is_image_key(key) {
            debug!("Ignoring removal of non-image key {key}");
            return;
        }

        if let Err(e) = self.store.remove(key) {
            warn!("Failed to remove image {key}: {e}");
        }
    }

    /// Displayable URL for an animal's image reference.
    ///
    /// Stored images resolve to their payload, falling back to a placeholder
    /// derived from `breed` when the payload is gone or empty. Anything else is
    /// already a URL.
    pub fn resolve(&self, reference: &str, breed: &str) -> String {
        match ImageReference::parse(reference) {
            ImageReference::Stored(key) => self
                .get_image(key.as_str())
                .filter(|payload| !payload.is_empty())
                .unwrap_or_else(|| placeholder_image_url(breed, ANIMAL_PLACEHOLDER_SIZE)),
            ImageReference::External(url) => url,
        }
    }

    /// Saves a new photo after removing the one it supersedes.
    pub fn replace_image(&self, previous: Option<&str>, payload: &str) -> ImageResult<ImageKey> {
        if let Some(previous) = previous {
            self.remove_image(previous);
        }
        self.save_image(payload)
    }

    /// Removes the stored photo of a deleted animal.
    pub fn release(&self, animal: &Animal) {
        self.remove_image(&animal.image_url);
    }

    /// Strictly increasing key that is not already taken.
    fn next_key(&self) -> ImageResult<ImageKey> {
        let mut last = self
            .last_timestamp
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut timestamp = Utc::now().timestamp_millis().max(*last + 1);
        loop {
            let key = ImageKey::from_timestamp(timestamp);
            if self.store.get(key.as_str())?.is_none() {
                *last = timestamp;
                return Ok(key);
            }
            timestamp += 1;
        }
    }

    /// Removes the image whose key carries the oldest timestamp.
    fn evict_oldest(&self) -> ImageResult<Option<String>> {
        let oldest = self
            .store
            .keys()?
            .into_iter()
            .filter(|k| ImageKey::is_image_key(k))
            .min_by_key(|k| ImageKey::timestamp_of(k));

        match oldest {
            Some(key) => {
                self.store.remove(&key)?;
                info!("Evicted image {key}");
                Ok(Some(key))
            }
            None => {
                warn!("No stored image to evict");
                Ok(None)
            }
        }
    }
}
