pub mod account_source;
pub mod animal;
pub mod breed_info;
pub mod image_key;
pub mod image_reference;
pub mod species;
pub mod user;
