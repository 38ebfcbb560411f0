//! pd-cli library
//!
//! Wires the account and image services to a file-backed store and runs
//! parsed commands, so the binary and the tests share one code path.

pub mod account_commands;
pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod image_commands;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use error::{AppError, Result as AppResult};

#[cfg(test)]
mod tests;
