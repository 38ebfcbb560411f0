use pd_core::ErrorLocation;
use pd_storage::StorageError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username already exists: {username} {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Email is already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User not found: {username} {location}")]
    UserNotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Incorrect current password {location}")]
    IncorrectPassword { location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Failed to serialize account data: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername { .. } => "DUPLICATE_USERNAME",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::IncorrectPassword { .. } => "INCORRECT_PASSWORD",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Message suitable for showing to the farmer.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DuplicateUsername { .. } => "Username already exists.",
            Self::DuplicateEmail { .. } => "Email is already registered.",
            Self::InvalidCredentials { .. } => "Invalid username or password.",
            Self::UserNotFound { .. } => "User not found.",
            Self::IncorrectPassword { .. } => "Incorrect current password.",
            Self::Storage { source, .. } => source.recovery_hint(),
            Self::PasswordHash { .. } | Self::Serialization { .. } => {
                "Something went wrong. Please try again."
            }
        }
    }

    #[track_caller]
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn incorrect_password() -> Self {
        Self::IncorrectPassword {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_hash(message: impl Into<String>) -> Self {
        Self::PasswordHash {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for AuthError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
