//! Events must be safe to emit with or without an installed subscriber.

use liminal_core::config::ObservabilityConfig;
use liminal_observability::tracing_setup::{events, spans};

#[test]
fn events_emit_without_subscriber() {
    events::session_created("t1");
    events::message_stored("t1", "ask", 1);
    events::drift_detected("t1", "coherence_drop", "high");
    events::terma_hidden("t1", "id", "insight");
    events::terma_revealed("t1", "id", "insight");
    events::sessions_expired(2);
    events::record_discarded("lss:session:t1", "expected value");
}

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        json: false,
    };
    liminal_observability::init_from_config(&config);
    liminal_observability::init_tracing();
    liminal_observability::init_tracing_with_filter("warn");

    let span = liminal_observability::store_span!("t1");
    let _guard = span.enter();
    events::session_created("t1");
}

#[test]
fn span_names_are_namespaced() {
    for name in [spans::names::STORE, spans::names::ANALYSIS, spans::names::CLEANUP] {
        assert!(name.starts_with("liminal."));
    }
}
