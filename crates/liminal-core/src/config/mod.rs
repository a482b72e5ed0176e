//! Configuration, loadable from TOML with every field defaulted.

pub mod defaults;
mod observability_config;
mod session_config;
mod storage_config;

pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiminalConfig {
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl LiminalConfig {
    /// Parse from TOML. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.session.validate()?;
        config.storage.validate()?;
        Ok(config)
    }
}
