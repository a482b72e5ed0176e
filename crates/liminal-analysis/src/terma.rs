//! Terma engine: hides insights with a context snapshot and reveals them
//! once every reveal condition holds.

use chrono::{DateTime, Utc};
use liminal_core::{
    AwarenessResult, CoherenceResult, Message, ObstacleResult, RevealConditions, Session, Terma,
    TermaContext,
};

use crate::text::jaccard_similarity;

/// Metric snapshot a reveal is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct RevealSnapshot<'a> {
    pub trigger: &'a Message,
    pub coherence: &'a CoherenceResult,
    pub awareness: &'a AwarenessResult,
    pub obstacles: &'a ObstacleResult,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TermaEngine;

impl TermaEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build an unrevealed terma capturing the session's current context.
    pub fn conceal(
        &self,
        session: &Session,
        category: impl Into<String>,
        content: impl Into<String>,
        conditions: RevealConditions,
        priority: u32,
        now: DateTime<Utc>,
    ) -> Terma {
        let last = session.last_message();
        Terma {
            id: uuid::Uuid::new_v4().to_string(),
            category: category.into(),
            content: content.into(),
            context: TermaContext {
                topic: last.and_then(|m| m.envelope.topic()).map(str::to_string),
                intent: last.map(|m| m.envelope.intent_type()),
                coherence: session.metrics.coherence.overall,
                awareness: session.metrics.awareness.overall,
                obstacles: session.metrics.obstacles.overall,
                hidden_at: now,
            },
            conditions,
            priority,
            revealed: false,
            revealed_at: None,
        }
    }

    /// Reveal every unrevealed terma whose conditions all hold, returning
    /// copies of the newly revealed ones.
    pub fn reveal_ready(&self, termas: &mut [Terma], snapshot: &RevealSnapshot<'_>) -> Vec<Terma> {
        let mut revealed = Vec::new();
        for terma in termas.iter_mut().filter(|t| !t.revealed) {
            if conditions_met(terma, snapshot) {
                terma.reveal(snapshot.now);
                revealed.push(terma.clone());
            }
        }
        revealed
    }
}

/// Whether every specified condition of `terma` holds for `snapshot`.
pub fn conditions_met(terma: &Terma, snapshot: &RevealSnapshot<'_>) -> bool {
    let RevealConditions {
        min_elapsed_ms,
        min_coherence,
        min_awareness,
        max_obstacles,
        intents,
        min_topic_similarity,
    } = &terma.conditions;

    let elapsed_ok = min_elapsed_ms.map_or(true, |ms| {
        let elapsed = (snapshot.now - terma.context.hidden_at).num_milliseconds();
        elapsed >= 0 && elapsed as u64 >= ms
    });
    let coherence_ok = min_coherence.map_or(true, |t| snapshot.coherence.overall >= t);
    let awareness_ok = min_awareness.map_or(true, |t| snapshot.awareness.overall >= t);
    let obstacles_ok = max_obstacles.map_or(true, |t| snapshot.obstacles.overall <= t);
    let intent_ok = intents
        .as_ref()
        .map_or(true, |allowed| allowed.contains(&snapshot.trigger.envelope.intent_type()));
    let topic_ok = min_topic_similarity.map_or(true, |t| {
        topic_similarity(terma.context.topic.as_deref(), snapshot.trigger.envelope.topic()) >= t
    });

    elapsed_ok && coherence_ok && awareness_ok && obstacles_ok && intent_ok && topic_ok
}

/// Jaccard similarity of two optional topics. A missing topic scores 0.
pub fn topic_similarity(hidden: Option<&str>, current: Option<&str>) -> f64 {
    match (hidden, current) {
        (Some(a), Some(b)) => jaccard_similarity(a, b),
        _ => 0.0,
    }
}
