pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::account_source::AccountSource;
pub use models::animal::Animal;
pub use models::breed_info::BreedInfo;
pub use models::image_key::{IMAGE_KEY_PREFIX, ImageKey};
pub use models::image_reference::{
    ANIMAL_PLACEHOLDER_SIZE, BREED_PLACEHOLDER_SIZE, ImageReference, placeholder_image_url,
};
pub use models::species::Species;
pub use models::user::{EXTERNAL_CREDENTIAL, User};

#[cfg(test)]
mod tests;
