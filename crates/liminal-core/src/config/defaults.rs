// Single source of truth for all default values.

// --- Session ---
pub const DEFAULT_MAX_MESSAGES: usize = 1_000;
pub const DEFAULT_SESSION_TTL_MS: u64 = 3_600_000; // 1 hour
pub const DEFAULT_COHERENCE_WINDOW: usize = 10;
pub const DEFAULT_DRIFT_MIN_COHERENCE: f64 = 0.6;
pub const DEFAULT_DRIFT_DROP_THRESHOLD: f64 = 0.2;
pub const DEFAULT_TOPIC_SHIFT_WINDOW: usize = 5;

// --- Storage ---
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_KEY_PREFIX: &str = "lss:session:";
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
