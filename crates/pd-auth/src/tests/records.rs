use crate::records::{decode_session, decode_users, encode_session, encode_users};

use pd_core::User;

fn sample_user() -> User {
    User::new("user_1", "farmer1", "f1@x.com", "$argon2id$stub")
}

#[test]
fn given_users_when_encoded_then_versioned_envelope() {
    let raw = encode_users(&[sample_user()]).unwrap();

    assert!(raw.starts_with("{\"schema_version\":1,\"users\":["));
    assert_eq!(decode_users(&raw).unwrap(), vec![sample_user()]);
}

#[test]
fn given_session_when_encoded_then_decodes_to_same_user() {
    let raw = encode_session(&sample_user()).unwrap();

    assert_eq!(decode_session(&raw).unwrap(), sample_user());
}

#[test]
fn given_truncated_json_when_decoded_then_error_message() {
    let raw = encode_users(&[sample_user()]).unwrap();
    let truncated = &raw[..raw.len() / 2];

    assert!(decode_users(truncated).is_err());
}

#[test]
fn given_unknown_schema_version_when_decoded_then_rejected() {
    let raw = r#"{"schema_version":9,"users":[]}"#;

    let message = decode_users(raw).unwrap_err();
    assert!(message.contains("schema version 9"));
}

#[test]
fn given_unversioned_array_when_decoded_then_rejected() {
    let raw = r#"[{"id":"user_1","username":"a","email":"a@x.com","passwordHash":"cGFzcw=="}]"#;

    assert!(decode_users(raw).is_err());
    assert!(decode_session(raw).is_err());
}
