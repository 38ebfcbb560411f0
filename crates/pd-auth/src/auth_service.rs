//! Credential and session store.
//!
//! Accounts and the active session live in a [`KeyValueStore`] under
//! [`USERS_KEY`] and [`SESSION_KEY`]. Single writer: concurrent callers
//! (or several processes sharing one store) get no serialization guarantees.

use crate::records::{decode_session, decode_users, encode_session, encode_users};
use crate::{
    AuthError, AuthResult, CredentialHasher, LoadResult, LogResetNotifier, OAUTH_SENTINEL,
    PasswordResetNotifier, SESSION_KEY, USERS_KEY,
};

use pd_core::{AccountSource, EXTERNAL_CREDENTIAL, User};
use pd_storage::KeyValueStore;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S%.3f";

/// Signup, login and session management over a key-value store.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    hasher: CredentialHasher,
    latency: Duration,
    notifier: Arc<dyn PasswordResetNotifier>,
}

impl AuthService {
    /// Creates a service that delays each remote-style operation by `latency`.
    pub fn new(store: Arc<dyn KeyValueStore>, hasher: CredentialHasher, latency: Duration) -> Self {
        Self {
            store,
            hasher,
            latency,
            notifier: Arc::new(LogResetNotifier),
        }
    }

    /// Replaces the password reset notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn PasswordResetNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Registers a new account and makes it the active session.
    ///
    /// With the [`OAUTH_SENTINEL`] password the email identifies the account:
    /// an existing account with that email is signed in and returned as is.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AuthResult<User> {
        self.simulate_latency().await;

        let mut users = self.load_users()?.users;

        if password == OAUTH_SENTINEL {
            if let Some(existing) = users.iter().find(|u| u.has_email(email)).cloned() {
                debug!("External signup for known email, signing in {}", existing.id);
                self.write_session(&existing)?;
                return Ok(existing);
            }

            let user = Self::provision_external(&users, username, email);
            users.push(user.clone());
            self.commit(&users, Some(&user))?;
            info!("Registered external account {} ({})", user.id, user.username);
            return Ok(user);
        }

        if users.iter().any(|u| u.has_username(username)) {
            return Err(AuthError::duplicate_username(username));
        }
        if users.iter().any(|u| u.has_email(email)) {
            return Err(AuthError::duplicate_email(email));
        }

        let user = User::new(
            Self::next_user_id(&users, AccountSource::Password),
            username,
            email,
            self.hasher.hash(password)?,
        );

        users.push(user.clone());
        self.commit(&users, Some(&user))?;

        info!("Registered account {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Signs in and makes the account the active session.
    ///
    /// With the [`OAUTH_SENTINEL`] password `username` is an email; an unknown
    /// email is provisioned with the email's local part as username.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<User> {
        self.simulate_latency().await;

        let mut users = self.load_users()?.users;

        if password == OAUTH_SENTINEL {
            let email = username;
            let user = match users.iter().find(|u| u.has_email(email)).cloned() {
                Some(user) => {
                    self.write_session(&user)?;
                    user
                }
                None => {
                    let local_part = email.split('@').next().unwrap_or(email);
                    let user = Self::provision_external(&users, local_part, email);
                    users.push(user.clone());
                    self.commit(&users, Some(&user))?;
                    info!("Auto-registered external account {} ({})", user.id, user.username);
                    user
                }
            };

            return Ok(user);
        }

        let user = users
            .into_iter()
            .find(|u| u.has_username(username))
            .filter(|u| self.hasher.verify(password, &u.password_hash))
            .ok_or_else(|| AuthError::invalid_credentials())?;

        self.write_session(&user)?;
        info!("Signed in {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Clears the active session. Storage failures are logged, never raised.
    pub fn logout(&self) {
        match self.store.remove(SESSION_KEY) {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!("Failed to clear session: {e}"),
        }
    }

    /// Account recorded when the session was set, if any.
    ///
    /// Does not check that the account still exists. Unreadable or corrupt
    /// session data counts as signed out.
    pub fn current_user(&self) -> Option<User> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read session: {e}");
                return None;
            }
        };

        match decode_session(&raw) {
            Ok(user) => Some(user),
            Err(message) => {
                warn!("Session data corrupted, signing out: {message}");
                if let Err(e) = self.store.remove(SESSION_KEY) {
                    warn!("Failed to clear corrupted session: {e}");
                }
                None
            }
        }
    }

    /// Replaces an account's password after checking the current one.
    ///
    /// Refreshes the session copy when the account is the active one.
    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<()> {
        self.simulate_latency().await;

        let mut users = self.load_users()?.users;
        let index = users
            .iter()
            .position(|u| u.has_username(username))
            .ok_or_else(|| AuthError::user_not_found(username))?;

        if !self
            .hasher
            .verify(current_password, &users[index].password_hash)
        {
            return Err(AuthError::incorrect_password());
        }

        users[index].password_hash = self.hasher.hash(new_password)?;
        let updated = users[index].clone();
        let signed_in = self
            .current_user()
            .is_some_and(|session| session.id == updated.id);

        self.commit(&users, signed_in.then_some(&updated))?;

        info!("Changed password for {}", updated.id);
        Ok(())
    }

    /// Handles a password reset request.
    ///
    /// Completes identically whether or not the email is registered; only
    /// the notifier learns the outcome.
    pub async fn forgot_password(&self, email: &str) {
        self.simulate_latency().await;

        let users = match self.load_users() {
            Ok(loaded) => loaded.users,
            Err(e) => {
                warn!("Failed to read accounts for password reset: {e}");
                Vec::new()
            }
        };

        let account = users.iter().find(|u| u.has_email(email));
        self.notifier.reset_requested(email, account);
    }

    /// Reads the stored user collection.
    ///
    /// Corrupt data yields an empty collection with `corruption_error` set.
    /// The raw value is copied to a `pashudhan_users.corrupted.<timestamp>`
    /// entry first. The copy is best effort: when it cannot be written the
    /// corrupt value stays in place and the next write replaces it.
    pub fn load_users(&self) -> AuthResult<LoadResult> {
        let Some(raw) = self.store.get(USERS_KEY)? else {
            return Ok(LoadResult::default());
        };

        match decode_users(&raw) {
            Ok(users) => Ok(LoadResult {
                users,
                corruption_error: None,
            }),
            Err(message) => {
                warn!("User collection corrupted: {message}");
                self.backup_corrupted_users(&raw);
                Ok(LoadResult {
                    users: Vec::new(),
                    corruption_error: Some(message),
                })
            }
        }
    }

    fn backup_corrupted_users(&self, raw: &str) {
        let backup_key = format!(
            "{USERS_KEY}.corrupted.{}",
            Utc::now().format(DATE_FORMAT)
        );

        let moved = self
            .store
            .set(&backup_key, raw)
            .and_then(|()| self.store.remove(USERS_KEY));

        match moved {
            Ok(()) => warn!("Backed up corrupted user collection to {backup_key}"),
            Err(e) => warn!("Failed to backup corrupted user collection: {e}"),
        }
    }

    /// Writes the user collection, then the session when one is given.
    ///
    /// A failed session write puts the previous user collection back, so an
    /// `Err` leaves accounts as they were before the call.
    fn commit(&self, users: &[User], session: Option<&User>) -> AuthResult<()> {
        let previous = self.store.get(USERS_KEY)?;
        self.write_users(users)?;

        let Some(user) = session else {
            return Ok(());
        };

        if let Err(e) = self.write_session(user) {
            self.restore_users(previous.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn restore_users(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(raw) => self.store.set(USERS_KEY, raw),
            None => self.store.remove(USERS_KEY),
        };

        match restored {
            Ok(()) => warn!("Session write failed, user collection rolled back"),
            Err(e) => warn!("Failed to roll back user collection: {e}"),
        }
    }

    fn write_users(&self, users: &[User]) -> AuthResult<()> {
        self.store.set(USERS_KEY, &encode_users(users)?)?;
        Ok(())
    }

    fn write_session(&self, user: &User) -> AuthResult<()> {
        self.store.set(SESSION_KEY, &encode_session(user)?)?;
        Ok(())
    }

    fn provision_external(users: &[User], username: &str, email: &str) -> User {
        User::new(
            Self::next_user_id(users, AccountSource::Google),
            Self::unique_username(users, username),
            email,
            EXTERNAL_CREDENTIAL,
        )
    }

    /// Timestamp-based id, bumped past any id already taken.
    fn next_user_id(users: &[User], source: AccountSource) -> String {
        let mut timestamp = Utc::now().timestamp_millis();
        loop {
            let id = source.user_id(timestamp);
            if !users.iter().any(|u| u.id == id) {
                return id;
            }
            timestamp += 1;
        }
    }

    /// `base`, or `base` with the lowest numeric suffix from 2 that is free.
    fn unique_username(users: &[User], base: &str) -> String {
        if !users.iter().any(|u| u.has_username(base)) {
            return base.to_string();
        }

        (2u32..)
            .map(|n| format!("{base}{n}"))
            .find(|candidate| !users.iter().any(|u| u.has_username(candidate)))
            .unwrap_or_else(|| base.to_string())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
