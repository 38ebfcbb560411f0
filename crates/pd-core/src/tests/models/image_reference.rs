use crate::{ImageKey, ImageReference, placeholder_image_url};

use googletest::prelude::*;

#[test]
fn given_prefixed_reference_when_parsed_then_stored() {
    let reference = ImageReference::parse("pashudhan_image_1700");

    assert_that!(
        reference,
        eq(&ImageReference::Stored(ImageKey::from_timestamp(1700)))
    );
}

#[test]
fn given_plain_url_when_parsed_then_external() {
    let reference = ImageReference::parse("https://cdn.example.com/gir.jpg");

    assert_that!(reference.stored_key(), none());
    assert_that!(reference.as_str(), eq("https://cdn.example.com/gir.jpg"));
}

#[test]
fn given_breed_when_placeholder_then_uses_initial_and_size() {
    assert_that!(
        placeholder_image_url("Sahiwal", 128),
        eq("https://ui-avatars.com/api/?name=S&background=random&size=128")
    );
}

#[test]
fn given_empty_breed_when_placeholder_then_name_is_empty() {
    assert_that!(
        placeholder_image_url("", 256),
        eq("https://ui-avatars.com/api/?name=&background=random&size=256")
    );
}
