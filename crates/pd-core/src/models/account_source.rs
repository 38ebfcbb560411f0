use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How an account was provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountSource {
    /// Username and password chosen at signup
    #[default]
    Password,
    /// Provisioned through the Google sign-in path
    Google,
}

impl AccountSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google",
        }
    }

    /// Prefix of user identifiers minted for this source.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Password => "user_",
            Self::Google => "user_google_",
        }
    }

    /// Builds a user identifier from a millisecond timestamp.
    pub fn user_id(&self, timestamp_millis: i64) -> String {
        format!("{}{timestamp_millis}", self.id_prefix())
    }
}

impl FromStr for AccountSource {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "password" => Ok(Self::Password),
            "google" => Ok(Self::Google),
            _ => Err(CoreError::InvalidAccountSource {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccountSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
