use liminal_core::{IntentType, Message};

use crate::math::clamp_unit;

/// Intent transitions that reverse a position on the same topic.
const REVERSALS: [(IntentType, IntentType); 3] = [
    (IntentType::Propose, IntentType::Disagree),
    (IntentType::Agree, IntentType::Disagree),
    (IntentType::Confirm, IntentType::Disagree),
];

/// Pleasure swing between neighbours that reads as an affective reversal.
const PLEASURE_SWING: f64 = 1.0;
const SWING_PENALTY: f64 = 0.5;

/// Reversals between adjacent messages, normalized by half the window.
///
/// Each same-topic reversal counts 1, each pleasure swing above 1.0 counts 0.5.
///
/// Range: 0.0 – 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    if messages.len() < 2 {
        return 0.0;
    }

    let mut score = 0.0;
    for pair in messages.windows(2) {
        let (prev, curr) = (&pair[0].envelope, &pair[1].envelope);

        let same_topic = matches!((prev.topic(), curr.topic()), (Some(a), Some(b)) if a == b);
        if same_topic && REVERSALS.contains(&(prev.intent_type(), curr.intent_type())) {
            score += 1.0;
        }

        if let (Some(a), Some(b)) = (prev.pad(), curr.pad()) {
            if (a.pleasure - b.pleasure).abs() > PLEASURE_SWING {
                score += SWING_PENALTY;
            }
        }
    }

    let normalizer = (messages.len() as f64 / 2.0).max(1.0);
    clamp_unit(score / normalizer)
}
