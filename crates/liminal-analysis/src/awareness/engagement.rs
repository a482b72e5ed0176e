use std::collections::HashSet;

use liminal_core::{IntentType, Message};

use crate::math::mean;

/// Intent adjacencies that read as a healthy exchange.
const RESPONSE_PATTERNS: [(IntentType, IntentType); 3] = [
    (IntentType::Ask, IntentType::Tell),
    (IntentType::Propose, IntentType::Confirm),
    (IntentType::Tell, IntentType::Ask),
];

/// Shortest span used for the message rate, in minutes.
const MIN_SPAN_MINUTES: f64 = 1.0 / 60.0;

/// Mean of activity, intent diversity, and response patterns.
///
/// - activity: `min(1, messagesPerMinute / 2)`
/// - diversity: `min(1, distinctIntents / 4)`
/// - response: `min(1, recognizedAdjacencies / (windowSize / 2))`
///
/// Range: 0.0 – 1.0. Empty window → 0.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    if messages.is_empty() {
        return 0.0;
    }
    mean(&[
        activity(messages),
        intent_diversity(messages),
        response_patterns(messages),
    ])
}

pub fn activity(messages: &[&Message]) -> f64 {
    let (Some(first), Some(last)) = (messages.first(), messages.last()) else {
        return 0.0;
    };
    let span_minutes =
        ((last.timestamp - first.timestamp).num_milliseconds() as f64 / 60_000.0).max(MIN_SPAN_MINUTES);
    let per_minute = messages.len() as f64 / span_minutes;
    (per_minute / 2.0).min(1.0)
}

pub fn intent_diversity(messages: &[&Message]) -> f64 {
    let distinct: HashSet<IntentType> = messages.iter().map(|m| m.envelope.intent_type()).collect();
    (distinct.len() as f64 / 4.0).min(1.0)
}

pub fn response_patterns(messages: &[&Message]) -> f64 {
    let recognized = messages
        .windows(2)
        .filter(|pair| {
            let transition = (pair[0].envelope.intent_type(), pair[1].envelope.intent_type());
            RESPONSE_PATTERNS.contains(&transition)
        })
        .count();
    let expected = messages.len() as f64 / 2.0;
    if expected == 0.0 {
        return 0.0;
    }
    (recognized as f64 / expected).min(1.0)
}
