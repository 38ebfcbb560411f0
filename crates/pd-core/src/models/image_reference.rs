use crate::ImageKey;

/// Placeholder size used for herd animals.
pub const ANIMAL_PLACEHOLDER_SIZE: u32 = 128;
/// Placeholder size used for recognised breeds.
pub const BREED_PLACEHOLDER_SIZE: u32 = 256;

/// Where an animal's photo lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    /// Payload held by the image store
    Stored(ImageKey),
    /// Directly usable URL
    External(String),
}

impl ImageReference {
    pub fn parse(reference: &str) -> Self {
        match reference.parse::<ImageKey>() {
            Ok(key) => Self::Stored(key),
            Err(_) => Self::External(reference.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Stored(key) => key.as_str(),
            Self::External(url) => url,
        }
    }

    pub fn stored_key(&self) -> Option<&ImageKey> {
        match self {
            Self::Stored(key) => Some(key),
            Self::External(_) => None,
        }
    }
}

/// Deterministic avatar URL derived from the first character of a breed name.
pub fn placeholder_image_url(breed: &str, size: u32) -> String {
    let initial = breed.chars().next().map(String::from).unwrap_or_default();
    format!("https://ui-avatars.com/api/?name={initial}&background=random&size={size}")
}
