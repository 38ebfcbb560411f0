use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Prefix shared by every stored-image entry.
pub const IMAGE_KEY_PREFIX: &str = "pashudhan_image_";

/// Key of a stored image: the prefix followed by a millisecond timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageKey(String);

impl ImageKey {
    pub fn from_timestamp(timestamp_millis: i64) -> Self {
        Self(format!("{IMAGE_KEY_PREFIX}{timestamp_millis}"))
    }

    /// Whether a raw storage key belongs to the image namespace.
    pub fn is_image_key(key: &str) -> bool {
        key.starts_with(IMAGE_KEY_PREFIX)
    }

    /// Creation timestamp embedded in the key.
    ///
    /// Reads the leading digits after the prefix; keys without any sort as 0.
    pub fn timestamp(&self) -> i64 {
        Self::timestamp_of(&self.0)
    }

    /// Same as [`ImageKey::timestamp`] for an unvalidated storage key.
    pub fn timestamp_of(key: &str) -> i64 {
        let suffix = key.strip_prefix(IMAGE_KEY_PREFIX).unwrap_or(key);
        let digits: String = suffix.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ImageKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if Self::is_image_key(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidImageKey {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl TryFrom<String> for ImageKey {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        value.parse()
    }
}

impl From<ImageKey> for String {
    fn from(key: ImageKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ImageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
