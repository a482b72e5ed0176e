use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A detected sharp negative shift in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftEvent {
    pub thread_id: String,
    #[serde(rename = "type")]
    pub event_type: DriftEventType,
    pub severity: DriftSeverity,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub details: Option<DriftDetails>,
}

/// Kinds of drift the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftEventType {
    /// Coherence fell below the floor by at least the drop threshold.
    CoherenceDrop,
    /// Too many distinct topics in the recent window.
    TopicShift,
}

impl DriftEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoherenceDrop => "coherence_drop",
            Self::TopicShift => "topic_shift",
        }
    }
}

/// Drift severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftSeverity {
    Low,
    Medium,
    High,
}

impl DriftSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Evidence attached to a drift event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriftDetails {
    CoherenceDrop { previous: f64, current: f64 },
    TopicShift { window: Vec<String>, unique_topics: usize },
}
