use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Storage adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Interval between background sweeps of the in-memory adapter (seconds).
    pub sweep_interval_secs: u64,
    /// Key prefix for key-value backends.
    pub key_prefix: String,
    /// Maximum entries held by the embedded key-value cache.
    pub max_capacity: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: defaults::DEFAULT_SWEEP_INTERVAL_SECS,
            key_prefix: defaults::DEFAULT_KEY_PREFIX.to_string(),
            max_capacity: defaults::DEFAULT_MAX_CAPACITY,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "sweep_interval_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
