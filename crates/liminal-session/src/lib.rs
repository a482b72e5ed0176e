//! # liminal-session
//!
//! Per-conversation session store.
//! Appends messages, recomputes coherence, awareness and obstacles on every
//! update, detects drift, reveals hidden termas, and publishes both as
//! notifications once the update is persisted.
//!
//! ## Modules
//!
//! - `store` — `SessionStore`, the orchestrator over any `ISessionStorage`
//! - `events` — typed broadcast channels for drift and terma reveals
//! - `locks` — per-thread update serialization
//! - `stats` — aggregates across all sessions

pub mod events;
pub mod locks;
pub mod stats;
pub mod store;

pub use events::{DriftNotification, EventBus, TermaRevealedNotification};
pub use locks::ThreadLocks;
pub use stats::aggregate_stats;
pub use store::SessionStore;
