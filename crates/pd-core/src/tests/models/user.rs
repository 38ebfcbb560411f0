use crate::{AccountSource, EXTERNAL_CREDENTIAL, User};

use googletest::prelude::*;

#[test]
fn given_mixed_case_username_when_has_username_then_matches() {
    // Given
    let user = User::new("user_1", "Farmer1", "f1@x.com", "hash");

    // Then
    assert_that!(user.has_username("farmer1"), eq(true));
    assert_that!(user.has_username("FARMER1"), eq(true));
    assert_that!(user.has_username("farmer2"), eq(false));
}

#[test]
fn given_mixed_case_email_when_has_email_then_matches() {
    let user = User::new("user_1", "farmer1", "F1@X.com", "hash");

    assert_that!(user.has_email("f1@x.COM"), eq(true));
    assert_that!(user.has_email("f2@x.com"), eq(false));
}

#[test]
fn given_external_credential_when_source_then_google() {
    let user = User::new("user_google_1", "ravi", "ravi@gmail.com", EXTERNAL_CREDENTIAL);

    assert_that!(user.is_external(), eq(true));
    assert_that!(user.source(), eq(AccountSource::Google));
}

#[test]
fn given_user_when_serialized_then_uses_camel_case_fields() {
    let user = User::new("user_1", "farmer1", "f1@x.com", "hash");

    let json = serde_json::to_string(&user).unwrap();

    assert_that!(json, contains_substring("\"passwordHash\":\"hash\""));
    let restored: User = serde_json::from_str(&json).unwrap();
    assert_that!(restored, eq(&user));
}
