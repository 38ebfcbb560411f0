use pd_storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Storage full after evicting oldest image, could not save {key} {location}")]
    StorageFull {
        key: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Unsupported upload type: {mime} {location}")]
    UnsupportedType {
        mime: String,
        location: ErrorLocation,
    },

    #[error("Upload of {size} bytes exceeds limit of {limit} bytes {location}")]
    TooLarge {
        size: usize,
        limit: usize,
        location: ErrorLocation,
    },
}

impl ImageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StorageFull { .. } => "STORAGE_FULL",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            Self::TooLarge { .. } => "TOO_LARGE",
        }
    }

    /// Message suitable for showing to the farmer.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::StorageFull { .. } => "Could not save image. Storage is full.",
            Self::Storage { source, .. } => source.recovery_hint(),
            Self::UnsupportedType { .. } => "Invalid format.",
            Self::TooLarge { .. } => "Image too large.",
        }
    }

    #[track_caller]
    pub fn storage_full(key: impl Into<String>) -> Self {
        Self::StorageFull {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported_type(mime: impl Into<String>) -> Self {
        Self::UnsupportedType {
            mime: mime.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_large(size: usize, limit: usize) -> Self {
        Self::TooLarge {
            size,
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for ImageError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;

/// Failure reported by a breed recognizer.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Could not identify a breed in the image {location}")]
    NoIdentification { location: ErrorLocation },

    #[error("Network failure: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Recognition failed: {message} {location}")]
    Failed {
        message: String,
        location: ErrorLocation,
    },
}

impl RecognitionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoIdentification { .. } => "NO_IDENTIFICATION",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Failed { .. } => "RECOGNITION_FAILED",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoIdentification { .. } => "Breed not identified.",
            Self::Network { .. } => "Network error.",
            Self::Failed { .. } => "Unexpected error.",
        }
    }

    #[track_caller]
    pub fn no_identification() -> Self {
        Self::NoIdentification {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<pd_core::CoreError> for RecognitionError {
    #[track_caller]
    fn from(err: pd_core::CoreError) -> Self {
        Self::failed(err.to_string())
    }
}
