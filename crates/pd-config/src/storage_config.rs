use crate::{ConfigError, ConfigErrorResult, DEFAULT_CAPACITY_BYTES, DEFAULT_STORAGE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file, relative to the config directory
    pub path: String,
    /// Quota in UTF-16 code units of keys plus values
    pub capacity_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_FILENAME),
            capacity_bytes: DEFAULT_CAPACITY_BYTES,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::storage("storage.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        if self.capacity_bytes == 0 {
            return Err(ConfigError::storage("storage.capacity_bytes must be > 0"));
        }

        Ok(())
    }
}
