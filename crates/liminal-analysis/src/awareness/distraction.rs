use std::collections::HashSet;

use liminal_core::Message;

use crate::coherence;
use crate::math::{average_pad_variance, mean};

/// Mean of three penalties over the window:
///
/// - topic jumps: `min(1, (distinctTopics − 1) / 4)`
/// - intent inconsistency: `1 − intentSimilarity`
/// - affect variance: `min(1, meanPadVariance × 5)`
///
/// Range: 0.0 – 1.0. Fewer than three messages → 0.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    if messages.len() < 3 {
        return 0.0;
    }

    let distinct_topics: HashSet<&str> =
        messages.iter().filter_map(|m| m.envelope.topic()).collect();
    let topic_jumps = (distinct_topics.len().saturating_sub(1) as f64 / 4.0).min(1.0);

    let intent_inconsistency = 1.0 - coherence::intent::calculate(messages);

    let affect_variance = average_pad_variance(messages)
        .map(|v| (v * 5.0).min(1.0))
        .unwrap_or(0.0);

    mean(&[topic_jumps, intent_inconsistency, affect_variance])
}
