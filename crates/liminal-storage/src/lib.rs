//! # liminal-storage
//!
//! Storage adapters behind [`liminal_core::ISessionStorage`].
//!
//! ## Modules
//!
//! - `memory` — process-local map with periodic expiry sweeps
//! - `kv` — JSON records in a key-value cache with native per-key TTL
//! - `moka_client` — embedded key-value client backed by `moka`
//! - `record` — the JSON record codec shared by key-value backends

pub mod kv;
pub mod memory;
pub mod moka_client;
pub mod record;

pub use kv::KvSessionStorage;
pub use memory::{InMemorySessionStorage, SweeperHandle};
pub use moka_client::MokaKvClient;

/// Convert a std TTL to chrono, saturating at the largest representable span.
pub(crate) fn chrono_ttl(ttl: std::time::Duration) -> chrono::Duration {
    chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::milliseconds(i64::MAX))
}
