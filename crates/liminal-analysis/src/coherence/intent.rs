use liminal_core::intent::affinity_vector;
use liminal_core::Message;

use crate::math::cosine_similarity;

/// Mean cosine similarity between the intent affinity vectors of
/// consecutive messages.
///
/// Range: 0.0 – 1.0. Fewer than two messages → 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    if messages.len() < 2 {
        return 1.0;
    }
    let total: f64 = messages
        .windows(2)
        .map(|pair| {
            cosine_similarity(
                affinity_vector(pair[0].envelope.intent_type()),
                affinity_vector(pair[1].envelope.intent_type()),
            )
        })
        .sum();
    total / (messages.len() - 1) as f64
}
