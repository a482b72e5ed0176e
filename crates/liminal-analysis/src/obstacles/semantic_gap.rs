use liminal_core::{IntentType, Message};

use crate::math::clamp_unit;
use crate::text::significant_tokens;

/// Topics this short are too terse to judge for overlap.
const MIN_TOPIC_LEN: usize = 4;
const UNANSWERED_ASK_PENALTY: f64 = 0.5;

/// Gaps between adjacent messages, normalized by the number of pairs.
///
/// A pair counts 1 when both topics are longer than three characters, differ,
/// and share no significant token. An `ask` not followed by `tell` or
/// `propose` counts 0.5.
///
/// Range: 0.0 – 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    if messages.len() < 2 {
        return 0.0;
    }

    let mut gaps = 0.0;
    for pair in messages.windows(2) {
        let (prev, curr) = (&pair[0].envelope, &pair[1].envelope);

        if let (Some(a), Some(b)) = (prev.topic(), curr.topic()) {
            if a != b && a.chars().count() >= MIN_TOPIC_LEN && b.chars().count() >= MIN_TOPIC_LEN {
                let shared = significant_tokens(a)
                    .intersection(&significant_tokens(b))
                    .count();
                if shared == 0 {
                    gaps += 1.0;
                }
            }
        }

        if prev.intent_type() == IntentType::Ask
            && !matches!(curr.intent_type(), IntentType::Tell | IntentType::Propose)
        {
            gaps += UNANSWERED_ASK_PENALTY;
        }
    }

    clamp_unit(gaps / (messages.len() - 1) as f64)
}
