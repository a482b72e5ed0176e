//! Score breakdowns derived from a session's history.
//!
//! Every field is a scalar in [0, 1]. `Default` yields the values a fresh
//! session starts with: perfect coherence and awareness, no obstacles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::drift_event::DriftEvent;
use super::terma::Terma;

/// Coherence of the recent message window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoherenceResult {
    pub overall: f64,
    pub intent_similarity: f64,
    pub affect_stability: f64,
    pub semantic_alignment: f64,
}

impl Default for CoherenceResult {
    fn default() -> Self {
        Self {
            overall: 1.0,
            intent_similarity: 1.0,
            affect_stability: 1.0,
            semantic_alignment: 1.0,
        }
    }
}

/// How present, clear, and engaged the conversation is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwarenessResult {
    pub overall: f64,
    pub presence: f64,
    pub clarity: f64,
    pub distraction: f64,
    pub engagement: f64,
}

impl Default for AwarenessResult {
    fn default() -> Self {
        Self {
            overall: 1.0,
            presence: 1.0,
            clarity: 1.0,
            distraction: 0.0,
            engagement: 1.0,
        }
    }
}

/// What is getting in the way of mutual understanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleResult {
    pub overall: f64,
    pub vagueness: f64,
    pub contradiction: f64,
    pub semantic_gap: f64,
    pub comprehension_barrier: f64,
}

/// Session-level metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub coherence: CoherenceResult,
    #[serde(default)]
    pub previous_coherence: Option<CoherenceResult>,
    #[serde(default)]
    pub awareness: AwarenessResult,
    #[serde(default)]
    pub obstacles: ObstacleResult,
    #[serde(default)]
    pub termas: Vec<Terma>,
    #[serde(default)]
    pub drift_events: Vec<DriftEvent>,
    pub updated_at: DateTime<Utc>,
}

impl SessionMetrics {
    /// Fresh metrics stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            coherence: CoherenceResult::default(),
            previous_coherence: None,
            awareness: AwarenessResult::default(),
            obstacles: ObstacleResult::default(),
            termas: Vec::new(),
            drift_events: Vec::new(),
            updated_at: now,
        }
    }
}

/// Caller-supplied override of selected metrics.
#[derive(Debug, Clone, Default)]
pub struct MetricsUpdate {
    /// Replaces the current coherence; the old value becomes `previous_coherence`.
    pub coherence: Option<CoherenceResult>,
    /// Replaces the drift-event log.
    pub drift_events: Option<Vec<DriftEvent>>,
}
