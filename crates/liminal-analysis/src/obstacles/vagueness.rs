use liminal_core::Message;

use crate::math::{clamp_unit, mean};
use crate::text::{payload_text, words};

/// Words that carry little concrete meaning on their own.
pub const VAGUE_WORDS: [&str; 24] = [
    "thing", "things", "stuff", "something", "somehow", "somewhat", "maybe", "perhaps",
    "probably", "whatever", "etc", "kinda", "sorta", "various", "several", "some", "someone",
    "somewhere", "anything", "everything", "possibly", "roughly", "basically", "generally",
];

/// Topics too generic to anchor a conversation.
pub const GENERIC_TOPICS: [&str; 8] = [
    "general", "misc", "other", "stuff", "things", "chat", "talk", "topic",
];

/// Ratio multiplier so a third of vague words saturates the text score.
const VAGUE_RATIO_SCALE: f64 = 3.0;
/// Penalty for a missing, generic, or very short topic.
const WEAK_TOPIC_PENALTY: f64 = 0.3;
const MIN_TOPIC_LEN: usize = 3;

/// Mean per-message vagueness over the window.
///
/// Per message: `min(1, 3 × vagueWords / words)` for textual payloads, plus
/// a fixed penalty when the topic is missing, generic, or shorter than three
/// characters, clamped to [0, 1].
///
/// Range: 0.0 – 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    let scores: Vec<f64> = messages.iter().map(|m| message_score(m)).collect();
    clamp_unit(mean(&scores))
}

fn message_score(message: &Message) -> f64 {
    let text_score = message
        .payload
        .as_ref()
        .and_then(payload_text)
        .map(text_vagueness)
        .unwrap_or(0.0);
    let topic_penalty = if weak_topic(message.envelope.topic()) {
        WEAK_TOPIC_PENALTY
    } else {
        0.0
    };
    clamp_unit(text_score + topic_penalty)
}

/// Share of vague words in `text`, scaled and capped at 1.
pub fn text_vagueness(text: &str) -> f64 {
    let tokens = words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let vague = tokens
        .iter()
        .filter(|w| VAGUE_WORDS.contains(&w.as_str()))
        .count();
    (VAGUE_RATIO_SCALE * vague as f64 / tokens.len() as f64).min(1.0)
}

fn weak_topic(topic: Option<&str>) -> bool {
    match topic.map(str::trim) {
        None => true,
        Some(t) => {
            t.chars().count() < MIN_TOPIC_LEN || GENERIC_TOPICS.contains(&t.to_lowercase().as_str())
        }
    }
}
