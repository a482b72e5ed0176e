//! # liminal-analysis
//!
//! Pure scoring engines over a session's message history.
//!
//! ## Modules
//!
//! - `coherence` — intent similarity, affect stability, semantic alignment
//! - `awareness` — presence, clarity, distraction, engagement
//! - `obstacles` — vagueness, contradiction, semantic gap, comprehension barrier
//! - `drift` — coherence drops and topic shifts between updates
//! - `terma` — hiding insights and evaluating their reveal conditions
//!
//! Every engine takes the history oldest-first and windows it internally.
//! All returned scores are clamped to [0, 1].

pub mod awareness;
pub mod coherence;
pub mod drift;
pub mod math;
pub mod obstacles;
pub mod terma;
pub mod text;

pub use awareness::AwarenessAnalyzer;
pub use coherence::CoherenceCalculator;
pub use drift::DriftDetector;
pub use obstacles::ObstacleDetector;
pub use terma::TermaEngine;

use liminal_core::Message;

/// The last `n` entries of `history`.
pub fn window<'a, 'm>(history: &'a [&'m Message], n: usize) -> &'a [&'m Message] {
    &history[history.len().saturating_sub(n)..]
}
