use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_UPLOAD_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Largest photo accepted for breed recognition
    pub max_upload_bytes: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ImagesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::images("images.max_upload_bytes must be > 0"));
        }

        Ok(())
    }
}
