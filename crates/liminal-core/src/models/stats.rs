use serde::{Deserialize, Serialize};

/// Aggregate view across every live session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub session_count: usize,
    pub total_messages: usize,
    /// Mean coherence; 0.0 when there are no sessions.
    pub average_coherence: f64,
    /// Mean awareness overall; 0.0 when there are no sessions.
    pub average_awareness: f64,
    /// Mean obstacles overall; 0.0 when there are no sessions.
    pub average_obstacles: f64,
}
