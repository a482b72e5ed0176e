//! Structured log events for key session store operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a session creation event.
pub fn session_created(thread_id: &str) {
    tracing::info!(
        event = "session_created",
        thread_id = %thread_id,
        "session created"
    );
}

/// Log a stored message.
pub fn message_stored(thread_id: &str, intent: &str, message_count: usize) {
    tracing::debug!(
        event = "message_stored",
        thread_id = %thread_id,
        intent = %intent,
        message_count = message_count,
        "message stored"
    );
}

/// Log a drift detection event.
pub fn drift_detected(thread_id: &str, drift_type: &str, severity: &str) {
    tracing::warn!(
        event = "drift_detected",
        thread_id = %thread_id,
        drift_type = %drift_type,
        severity = %severity,
        "drift detected"
    );
}

/// Log a hidden terma.
pub fn terma_hidden(thread_id: &str, terma_id: &str, category: &str) {
    tracing::info!(
        event = "terma_hidden",
        thread_id = %thread_id,
        terma_id = %terma_id,
        category = %category,
        "terma hidden"
    );
}

/// Log a revealed terma.
pub fn terma_revealed(thread_id: &str, terma_id: &str, category: &str) {
    tracing::info!(
        event = "terma_revealed",
        thread_id = %thread_id,
        terma_id = %terma_id,
        category = %category,
        "terma revealed"
    );
}

/// Log an expiry sweep that removed at least one session.
pub fn sessions_expired(removed: usize) {
    tracing::info!(
        event = "sessions_expired",
        removed = removed,
        "expired sessions removed"
    );
}

/// Log a stored record that could not be decoded and was treated as absent.
pub fn record_discarded(key: &str, reason: &str) {
    tracing::warn!(
        event = "record_discarded",
        key = %key,
        reason = %reason,
        "undecodable session record discarded"
    );
}
