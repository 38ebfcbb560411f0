//! Versioned envelopes for the persisted user collection and session.

use crate::AuthResult;

use pd_core::User;

use serde::{Deserialize, Serialize};

pub(crate) const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct UserCollectionRef<'a> {
    schema_version: u32,
    users: &'a [User],
}

#[derive(Deserialize)]
struct UserCollection {
    schema_version: u32,
    users: Vec<User>,
}

#[derive(Serialize)]
struct SessionRef<'a> {
    schema_version: u32,
    user: &'a User,
}

#[derive(Deserialize)]
struct Session {
    schema_version: u32,
    user: User,
}

pub(crate) fn encode_users(users: &[User]) -> AuthResult<String> {
    Ok(serde_json::to_string(&UserCollectionRef {
        schema_version: SCHEMA_VERSION,
        users,
    })?)
}

/// Decodes a stored collection, describing the problem if it is corrupt.
pub(crate) fn decode_users(raw: &str) -> Result<Vec<User>, String> {
    let collection: UserCollection = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    check_version(collection.schema_version)?;
    Ok(collection.users)
}

pub(crate) fn encode_session(user: &User) -> AuthResult<String> {
    Ok(serde_json::to_string(&SessionRef {
        schema_version: SCHEMA_VERSION,
        user,
    })?)
}

pub(crate) fn decode_session(raw: &str) -> Result<User, String> {
    let session: Session = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    check_version(session.schema_version)?;
    Ok(session.user)
}

fn check_version(version: u32) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(format!("unsupported schema version {version}"))
    }
}
