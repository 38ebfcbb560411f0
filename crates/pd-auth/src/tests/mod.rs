mod error;
mod records;
