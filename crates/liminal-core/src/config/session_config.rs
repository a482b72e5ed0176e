use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Session store behavior: history bound, expiry, and scoring windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum messages kept per session; the oldest are evicted first.
    pub max_messages: usize,
    /// Idle time after which a session expires (milliseconds).
    pub session_ttl_ms: u64,
    /// Number of recent messages scored for coherence.
    pub coherence_window: usize,
    /// Coherence floor below which a drop counts as drift.
    pub drift_min_coherence: f64,
    /// Minimum coherence drop between updates that counts as drift.
    pub drift_drop_threshold: f64,
    /// Number of recent messages inspected for topic shifts.
    pub topic_shift_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_messages: defaults::DEFAULT_MAX_MESSAGES,
            session_ttl_ms: defaults::DEFAULT_SESSION_TTL_MS,
            coherence_window: defaults::DEFAULT_COHERENCE_WINDOW,
            drift_min_coherence: defaults::DEFAULT_DRIFT_MIN_COHERENCE,
            drift_drop_threshold: defaults::DEFAULT_DRIFT_DROP_THRESHOLD,
            topic_shift_window: defaults::DEFAULT_TOPIC_SHIFT_WINDOW,
        }
    }
}

impl SessionConfig {
    /// Session TTL as a std duration, for backends with native expiry.
    pub fn session_ttl_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.session_ttl_ms)
    }

    /// Reject values the scoring engines cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_messages == 0 {
            return Err(ConfigError::Invalid {
                field: "max_messages",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.coherence_window < 2 {
            return Err(ConfigError::Invalid {
                field: "coherence_window",
                reason: format!("must be at least 2, got {}", self.coherence_window),
            });
        }
        if self.topic_shift_window == 0 {
            return Err(ConfigError::Invalid {
                field: "topic_shift_window",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("drift_min_coherence", self.drift_min_coherence),
            ("drift_drop_threshold", self.drift_drop_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}
