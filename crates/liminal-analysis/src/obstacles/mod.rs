//! Obstacle detector: what is getting in the way of mutual understanding.
//!
//! `overall` is the mean of the four obstacle scores, clamped to [0, 1].

pub mod comprehension;
pub mod contradiction;
pub mod semantic_gap;
pub mod vagueness;

use liminal_core::{Message, ObstacleResult};

use crate::math::{clamp_unit, mean};
use crate::window;

/// Messages inspected for vagueness.
pub const VAGUENESS_WINDOW: usize = 5;
/// Messages inspected for contradictions.
pub const CONTRADICTION_WINDOW: usize = 10;
/// Messages inspected for semantic gaps.
pub const SEMANTIC_GAP_WINDOW: usize = 8;
/// Messages inspected for comprehension barriers.
pub const COMPREHENSION_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct ObstacleDetector;

impl ObstacleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Obstacles in `history` (oldest first). Fewer than two messages → none.
    pub fn detect(&self, history: &[&Message]) -> ObstacleResult {
        if history.len() < 2 {
            return ObstacleResult::default();
        }

        let vagueness = clamp_unit(vagueness::calculate(window(history, VAGUENESS_WINDOW)));
        let contradiction =
            clamp_unit(contradiction::calculate(window(history, CONTRADICTION_WINDOW)));
        let semantic_gap = clamp_unit(semantic_gap::calculate(window(history, SEMANTIC_GAP_WINDOW)));
        let comprehension_barrier =
            clamp_unit(comprehension::calculate(window(history, COMPREHENSION_WINDOW)));

        ObstacleResult {
            overall: clamp_unit(mean(&[
                vagueness,
                contradiction,
                semantic_gap,
                comprehension_barrier,
            ])),
            vagueness,
            contradiction,
            semantic_gap,
            comprehension_barrier,
        }
    }
}
