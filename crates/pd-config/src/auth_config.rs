use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_LATENCY_MS, MAX_HASH_PARALLELISM, MAX_LATENCY_MS,
    MIN_HASH_MEMORY_KIB_PER_LANE,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Artificial delay applied to signup, login, password change and reset
    pub latency_ms: u64,
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.latency_ms must be 0-{}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }

        if self.hash_parallelism == 0 || self.hash_parallelism > MAX_HASH_PARALLELISM {
            return Err(ConfigError::auth(format!(
                "auth.hash_parallelism must be 1-{}, got {}",
                MAX_HASH_PARALLELISM, self.hash_parallelism
            )));
        }

        if self.hash_iterations == 0 {
            return Err(ConfigError::auth("auth.hash_iterations must be >= 1"));
        }

        let min_memory = MIN_HASH_MEMORY_KIB_PER_LANE.saturating_mul(self.hash_parallelism);
        if self.hash_memory_kib < min_memory {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be >= {} for parallelism {}, got {}",
                min_memory, self.hash_parallelism, self.hash_memory_kib
            )));
        }

        Ok(())
    }
}
