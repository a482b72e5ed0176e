//! Tracing setup: subscriber initialization plus span and event definitions.

pub mod events;
pub mod spans;

use std::sync::Once;

use liminal_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "LIMINAL_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `LIMINAL_LOG` environment variable for filtering and
/// defaults to `info` when it is unset. Later calls are no-ops.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize from config. `LIMINAL_LOG` still wins over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), true));
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    // A host application may already own the global subscriber.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
