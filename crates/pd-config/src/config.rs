use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, ImagesConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub images: ImagesConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PD_CONFIG_DIR env var, else use ./.pashudhan/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PD_CONFIG_DIR env var > ./.pashudhan/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.auth.validate()?;
        self.images.validate()?;
        Ok(())
    }

    /// Get absolute path to the store file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.path))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {} (capacity {} bytes)",
            self.storage.path, self.storage.capacity_bytes
        );
        info!(
            "  auth: latency={}ms, argon2 m={}KiB t={} p={}",
            self.auth.latency_ms,
            self.auth.hash_memory_kib,
            self.auth.hash_iterations,
            self.auth.hash_parallelism
        );
        info!("  images: max_upload={} bytes", self.images.max_upload_bytes);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("PD_STORAGE_PATH", &mut self.storage.path);
        Self::apply_env_parse(
            "PD_STORAGE_CAPACITY_BYTES",
            &mut self.storage.capacity_bytes,
        );

        // Auth
        Self::apply_env_parse("PD_AUTH_LATENCY_MS", &mut self.auth.latency_ms);
        Self::apply_env_parse("PD_AUTH_HASH_MEMORY_KIB", &mut self.auth.hash_memory_kib);
        Self::apply_env_parse("PD_AUTH_HASH_ITERATIONS", &mut self.auth.hash_iterations);
        Self::apply_env_parse(
            "PD_AUTH_HASH_PARALLELISM",
            &mut self.auth.hash_parallelism,
        );

        // Images
        Self::apply_env_parse(
            "PD_IMAGES_MAX_UPLOAD_BYTES",
            &mut self.images.max_upload_bytes,
        );

        // Logging
        Self::apply_env_parse("PD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
