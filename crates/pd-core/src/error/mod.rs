use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid species: {value} {location}")]
    InvalidSpecies {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid account source: {value} {location}")]
    InvalidAccountSource {
        value: String,
        location: ErrorLocation,
    },

    #[error("Not an image key: {value} {location}")]
    InvalidImageKey {
        value: String,
        location: ErrorLocation,
    },

    #[error("Breed record parse error: {source} {location}")]
    BreedInfoParse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::BreedInfoParse {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
