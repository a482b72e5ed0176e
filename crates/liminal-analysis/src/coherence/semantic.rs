use std::collections::HashSet;

use liminal_core::Message;

/// `1 / distinct topics` across the window.
///
/// Range: 0.0 – 1.0. Fewer than two messages with a topic → 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    let topics: Vec<&str> = messages.iter().filter_map(|m| m.envelope.topic()).collect();
    if topics.len() < 2 {
        return 1.0;
    }
    let distinct: HashSet<&str> = topics.into_iter().collect();
    1.0 / distinct.len() as f64
}
