use crate::image_commands::guess_mime;

use std::path::Path;

#[test]
fn given_photo_extensions_when_guessed_then_image_types() {
    assert_eq!(guess_mime(Path::new("cow.png")), Some("image/png"));
    assert_eq!(guess_mime(Path::new("cow.JPG")), Some("image/jpeg"));
    assert_eq!(guess_mime(Path::new("cow.jpeg")), Some("image/jpeg"));
    assert_eq!(guess_mime(Path::new("cow.webp")), Some("image/webp"));
}

#[test]
fn given_unknown_or_missing_extension_when_guessed_then_none() {
    assert_eq!(guess_mime(Path::new("notes.txt")), None);
    assert_eq!(guess_mime(Path::new("photo")), None);
}
