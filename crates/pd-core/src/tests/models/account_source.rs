use crate::AccountSource;

use std::str::FromStr;

#[test]
fn test_account_source_as_str() {
    assert_eq!(AccountSource::Password.as_str(), "password");
    assert_eq!(AccountSource::Google.as_str(), "google");
}

#[test]
fn test_account_source_from_str() {
    assert_eq!(
        AccountSource::from_str("google").unwrap(),
        AccountSource::Google
    );
    assert!(AccountSource::from_str("facebook").is_err());
}

#[test]
fn test_account_source_user_id() {
    assert_eq!(AccountSource::Password.user_id(1700), "user_1700");
    assert_eq!(AccountSource::Google.user_id(1700), "user_google_1700");
}
