//! Terma: guidance hidden in a session until its reveal conditions hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::IntentType;

/// A deferred insight and the context it was hidden in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terma {
    pub id: String,
    pub category: String,
    pub content: String,
    pub context: TermaContext,
    pub conditions: RevealConditions,
    pub priority: u32,
    pub revealed: bool,
    #[serde(default)]
    pub revealed_at: Option<DateTime<Utc>>,
}

/// Snapshot of the session when a terma was hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermaContext {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentType>,
    pub coherence: f64,
    pub awareness: f64,
    pub obstacles: f64,
    pub hidden_at: DateTime<Utc>,
}

/// Conditions that must all hold for a terma to be revealed.
///
/// An absent condition is always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConditions {
    /// Minimum time since the terma was hidden, in milliseconds.
    pub min_elapsed_ms: Option<u64>,
    pub min_coherence: Option<f64>,
    pub min_awareness: Option<f64>,
    pub max_obstacles: Option<f64>,
    /// The triggering message's intent must be one of these.
    pub intents: Option<Vec<IntentType>>,
    /// Minimum Jaccard similarity between the hidden-time topic and the current one.
    pub min_topic_similarity: Option<f64>,
}

impl RevealConditions {
    pub fn min_elapsed_ms(mut self, ms: u64) -> Self {
        self.min_elapsed_ms = Some(ms);
        self
    }

    pub fn min_coherence(mut self, threshold: f64) -> Self {
        self.min_coherence = Some(threshold);
        self
    }

    pub fn min_awareness(mut self, threshold: f64) -> Self {
        self.min_awareness = Some(threshold);
        self
    }

    pub fn max_obstacles(mut self, threshold: f64) -> Self {
        self.max_obstacles = Some(threshold);
        self
    }

    pub fn intents(mut self, intents: impl IntoIterator<Item = IntentType>) -> Self {
        self.intents = Some(intents.into_iter().collect());
        self
    }

    pub fn min_topic_similarity(mut self, threshold: f64) -> Self {
        self.min_topic_similarity = Some(threshold);
        self
    }
}

impl Terma {
    /// Mark as revealed at `now`. Has no effect on an already revealed terma.
    pub fn reveal(&mut self, now: DateTime<Utc>) {
        if !self.revealed {
            self.revealed = true;
            self.revealed_at = Some(now);
        }
    }
}
