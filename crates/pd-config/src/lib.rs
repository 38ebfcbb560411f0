mod auth_config;
mod config;
mod error;
mod images_config;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use images_config::ImagesConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "PD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".pashudhan";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "store.json";
const DEFAULT_CAPACITY_BYTES: usize = 5 * 1024 * 1024;

const DEFAULT_LATENCY_MS: u64 = 500;
const MAX_LATENCY_MS: u64 = 60_000;
// Argon2id defaults and lower bounds
const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;
const MIN_HASH_MEMORY_KIB_PER_LANE: u32 = 8;
const MAX_HASH_PARALLELISM: u32 = 0x00ff_ffff;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 4 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
