//! # liminal-core
//!
//! Foundation crate for the Liminal session store.
//! Defines the envelope view, session models, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{LiminalConfig, SessionConfig};
pub use envelope::{Affect, ConsentLevel, Envelope, Intent, Meaning, Pad, Policy};
pub use errors::{LiminalError, LiminalResult};
pub use intent::IntentType;
pub use models::{
    AwarenessResult, CoherenceResult, DriftDetails, DriftEvent, DriftEventType, DriftSeverity,
    Message, MetricsUpdate, ObstacleResult, RevealConditions, Session, SessionMetadata,
    SessionMetrics, SessionStats, Terma, TermaContext,
};
pub use traits::{IKeyValueClient, ISessionStorage};
