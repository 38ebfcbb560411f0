use crate::AuthError;

use pd_storage::StorageError;

#[test]
fn given_each_variant_when_user_message_then_matches_ui_text() {
    assert_eq!(
        AuthError::duplicate_username("farmer1").user_message(),
        "Username already exists."
    );
    assert_eq!(
        AuthError::duplicate_email("f1@x.com").user_message(),
        "Email is already registered."
    );
    assert_eq!(
        AuthError::invalid_credentials().user_message(),
        "Invalid username or password."
    );
    assert_eq!(
        AuthError::user_not_found("ghost").user_message(),
        "User not found."
    );
    assert_eq!(
        AuthError::incorrect_password().user_message(),
        "Incorrect current password."
    );
}

#[test]
fn given_each_variant_when_error_code_then_distinct() {
    let codes = [
        AuthError::duplicate_username("a").error_code(),
        AuthError::duplicate_email("a").error_code(),
        AuthError::invalid_credentials().error_code(),
        AuthError::user_not_found("a").error_code(),
        AuthError::incorrect_password().error_code(),
        AuthError::password_hash("bad").error_code(),
    ];

    let mut unique = codes.to_vec();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn given_storage_error_when_converted_then_wrapped() {
    let err: AuthError = StorageError::quota_exceeded("pashudhan_users", 10, 0).into();

    assert!(matches!(err, AuthError::Storage { .. }));
    assert_eq!(err.error_code(), "STORAGE_ERROR");
}
