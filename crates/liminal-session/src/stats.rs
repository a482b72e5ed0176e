use liminal_analysis::math::mean;
use liminal_core::{Session, SessionStats};

/// Aggregate counts and mean scores over `sessions`. Means are 0.0 when empty.
pub fn aggregate_stats(sessions: &[Session]) -> SessionStats {
    let coherence: Vec<f64> = sessions.iter().map(|s| s.coherence).collect();
    let awareness: Vec<f64> = sessions
        .iter()
        .map(|s| s.metrics.awareness.overall)
        .collect();
    let obstacles: Vec<f64> = sessions
        .iter()
        .map(|s| s.metrics.obstacles.overall)
        .collect();

    SessionStats {
        session_count: sessions.len(),
        total_messages: sessions.iter().map(|s| s.messages.len()).sum(),
        average_coherence: mean(&coherence),
        average_awareness: mean(&awareness),
        average_obstacles: mean(&obstacles),
    }
}
