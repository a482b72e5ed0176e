//! Span definitions for the store's per-thread operations.

/// Span wrapping one `store` call.
#[macro_export]
macro_rules! store_span {
    ($thread_id:expr) => {
        tracing::info_span!("liminal.store", thread_id = %$thread_id)
    };
}

/// Span wrapping a metrics recomputation.
#[macro_export]
macro_rules! analysis_span {
    ($thread_id:expr, $history_len:expr) => {
        tracing::debug_span!("liminal.analysis", thread_id = %$thread_id, history_len = $history_len)
    };
}

/// Span wrapping an expiry sweep.
#[macro_export]
macro_rules! cleanup_span {
    () => {
        tracing::debug_span!("liminal.cleanup")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STORE: &str = "liminal.store";
    pub const ANALYSIS: &str = "liminal.analysis";
    pub const CLEANUP: &str = "liminal.cleanup";
}
