mod account_source;
mod breed_info;
mod image_key;
mod image_reference;
mod species;
mod user;
