//! Coherence calculator.
//!
//! ```text
//! overall = 0.4 × intentSimilarity + 0.3 × affectStability + 0.3 × semanticAlignment
//! ```
//!
//! computed over the last `coherence_window` messages and clamped to [0, 1].

pub mod affect;
pub mod intent;
pub mod semantic;

use liminal_core::{CoherenceResult, Message};

use crate::math::clamp_unit;
use crate::window;

const INTENT_WEIGHT: f64 = 0.4;
const AFFECT_WEIGHT: f64 = 0.3;
const SEMANTIC_WEIGHT: f64 = 0.3;

/// Scores how consistent the recent conversation is.
#[derive(Debug, Clone, Copy)]
pub struct CoherenceCalculator {
    window: usize,
}

impl CoherenceCalculator {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Coherence of `history` (oldest first). Fewer than two messages is
    /// perfectly coherent by definition.
    pub fn calculate(&self, history: &[&Message]) -> CoherenceResult {
        if history.len() < 2 {
            return CoherenceResult::default();
        }

        let recent = window(history, self.window);
        let intent_similarity = clamp_unit(intent::calculate(recent));
        let affect_stability = clamp_unit(affect::calculate(recent));
        let semantic_alignment = clamp_unit(semantic::calculate(recent));

        let overall = clamp_unit(
            INTENT_WEIGHT * intent_similarity
                + AFFECT_WEIGHT * affect_stability
                + SEMANTIC_WEIGHT * semantic_alignment,
        );

        CoherenceResult {
            overall,
            intent_similarity,
            affect_stability,
            semantic_alignment,
        }
    }
}

impl Default for CoherenceCalculator {
    fn default() -> Self {
        Self::new(liminal_core::config::defaults::DEFAULT_COHERENCE_WINDOW)
    }
}
