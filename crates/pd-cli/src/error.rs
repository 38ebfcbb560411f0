use pd_auth::AuthError;
use pd_config::ConfigError;
use pd_images::ImageError;
use pd_storage::StorageError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the `pashudhan` command.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Image {
        #[source]
        source: ImageError,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Auth { source, .. } => source.error_code(),
            Self::Image { source, .. } => source.error_code(),
            Self::Io { .. } => "IO_ERROR",
            Self::Logger { .. } => "LOGGER_ERROR",
        }
    }

    /// Text printed to the user on failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { source, .. } => source.to_string(),
            Self::Storage { source, .. } => source.recovery_hint().to_string(),
            Self::Auth { source, .. } => source.user_message().to_string(),
            Self::Image { source, .. } => source.user_message().to_string(),
            Self::Io { path, source, .. } => format!("Cannot read {}: {source}", path.display()),
            Self::Logger { message, .. } => message.clone(),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for AppError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for AppError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ImageError> for AppError {
    #[track_caller]
    fn from(source: ImageError) -> Self {
        Self::Image {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
