pub mod auth_service;
pub mod credential_hasher;
pub mod error;
pub mod load_result;
mod records;
pub mod reset_notifier;

pub use auth_service::AuthService;
pub use credential_hasher::{CredentialHasher, HashParams};
pub use error::{AuthError, Result as AuthResult};
pub use load_result::LoadResult;
pub use reset_notifier::{LogResetNotifier, PasswordResetNotifier};

/// Storage key holding the user collection.
pub const USERS_KEY: &str = "pashudhan_users";
/// Storage key holding the active session.
pub const SESSION_KEY: &str = "pashudhan_currentUser";
/// Password value that selects the simulated Google sign-in path.
pub const OAUTH_SENTINEL: &str = "google_oauth_token";

#[cfg(test)]
mod tests;
