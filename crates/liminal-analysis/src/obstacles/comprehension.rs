use liminal_core::Message;

use crate::math::{clamp_unit, mean};
use crate::text::{payload_depth, payload_text, words};

const MAX_COMFORTABLE_WORDS: usize = 100;
const MAX_COMFORTABLE_DEPTH: usize = 4;

/// Mean per-message load over the window.
///
/// Per message: `min(1, (words − 100) / 100)` for long textual payloads plus
/// `min(1, (depth − 4) / 4)` for deeply nested structured payloads, clamped.
///
/// Range: 0.0 – 1.0.
pub fn calculate(messages: &[&Message]) -> f64 {
    let scores: Vec<f64> = messages.iter().map(|m| message_load(m)).collect();
    clamp_unit(mean(&scores))
}

fn message_load(message: &Message) -> f64 {
    let Some(payload) = message.payload.as_ref() else {
        return 0.0;
    };

    let length_penalty = payload_text(payload)
        .map(|text| words(text).len())
        .filter(|&count| count > MAX_COMFORTABLE_WORDS)
        .map(|count| {
            ((count - MAX_COMFORTABLE_WORDS) as f64 / MAX_COMFORTABLE_WORDS as f64).min(1.0)
        })
        .unwrap_or(0.0);

    let depth = payload_depth(payload);
    let depth_penalty = if depth > MAX_COMFORTABLE_DEPTH {
        ((depth - MAX_COMFORTABLE_DEPTH) as f64 / MAX_COMFORTABLE_DEPTH as f64).min(1.0)
    } else {
        0.0
    };

    clamp_unit(length_penalty + depth_penalty)
}
