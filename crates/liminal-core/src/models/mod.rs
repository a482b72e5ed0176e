//! Session, metrics, drift, and terma models.

pub mod drift_event;
pub mod message;
pub mod metrics;
pub mod session;
pub mod stats;
pub mod terma;

pub use drift_event::{DriftDetails, DriftEvent, DriftEventType, DriftSeverity};
pub use message::Message;
pub use metrics::{AwarenessResult, CoherenceResult, MetricsUpdate, ObstacleResult, SessionMetrics};
pub use session::{Session, SessionMetadata};
pub use stats::SessionStats;
pub use terma::{RevealConditions, Terma, TermaContext};
