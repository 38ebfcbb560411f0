//! User account record.

use crate::AccountSource;

use serde::{Deserialize, Serialize};

/// Credential stored for accounts authenticated by an external provider.
/// It is not a password hash and never verifies against any password.
pub const EXTERNAL_CREDENTIAL: &str = "google_oauth_protected";

/// A registered farmer account.
///
/// Usernames and emails are unique among stored users, compared without
/// regard to letter case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// PHC-formatted password hash, or [`EXTERNAL_CREDENTIAL`]
    pub password_hash: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    pub fn is_external(&self) -> bool {
        self.password_hash == EXTERNAL_CREDENTIAL
    }

    pub fn source(&self) -> AccountSource {
        if self.is_external() {
            AccountSource::Google
        } else {
            AccountSource::Password
        }
    }
}
