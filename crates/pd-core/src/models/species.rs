use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of animal kept in a herd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cattle,
    Buffalo,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cattle => "Cattle",
            Self::Buffalo => "Buffalo",
        }
    }
}

impl FromStr for Species {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cattle" => Ok(Self::Cattle),
            "buffalo" => Ok(Self::Buffalo),
            _ => Err(CoreError::InvalidSpecies {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
