//! Awareness analyzer: how present, clear, and engaged a conversation is.
//!
//! ```text
//! overall = mean(presence, clarity, engagement) × (1 − distraction)
//! ```

pub mod distraction;
pub mod engagement;
pub mod presence;

use chrono::{DateTime, Utc};
use liminal_core::{AwarenessResult, CoherenceResult, Message};

use crate::math::{clamp_unit, mean};
use crate::window;

/// Messages inspected for presence.
pub const PRESENCE_WINDOW: usize = 10;
/// Messages inspected for distraction.
pub const DISTRACTION_WINDOW: usize = 5;
/// Messages inspected for engagement.
pub const ENGAGEMENT_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct AwarenessAnalyzer;

impl AwarenessAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Awareness of `history` (oldest first) as of `now`, reusing the
    /// coherence breakdown computed for the same update.
    pub fn analyze(
        &self,
        history: &[&Message],
        coherence: &CoherenceResult,
        now: DateTime<Utc>,
    ) -> AwarenessResult {
        if history.len() < 2 {
            return AwarenessResult::default();
        }

        let presence = clamp_unit(presence::calculate(window(history, PRESENCE_WINDOW), now));
        let clarity = clamp_unit(clarity(coherence));
        let distraction = clamp_unit(distraction::calculate(window(history, DISTRACTION_WINDOW)));
        let engagement = clamp_unit(engagement::calculate(window(history, ENGAGEMENT_WINDOW)));

        let overall = clamp_unit(mean(&[presence, clarity, engagement]) * (1.0 - distraction));

        AwarenessResult {
            overall,
            presence,
            clarity,
            distraction,
            engagement,
        }
    }
}

/// `0.5 × semanticAlignment + 0.3 × intentSimilarity + 0.2 × affectStability`.
pub fn clarity(coherence: &CoherenceResult) -> f64 {
    0.5 * coherence.semantic_alignment
        + 0.3 * coherence.intent_similarity
        + 0.2 * coherence.affect_stability
}
