//! Text and payload inspection helpers.

use std::collections::HashSet;

use serde_json::Value;

/// Payload object fields that carry message text.
const TEXT_FIELDS: [&str; 3] = ["text", "content", "message"];

/// Lowercased alphanumeric tokens longer than two characters.
pub fn significant_tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 2)
        .map(str::to_lowercase)
        .collect()
}

/// Jaccard similarity of the significant tokens of two strings.
///
/// 0 when either side has no significant tokens.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let left = significant_tokens(a);
    let right = significant_tokens(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();
    let union = left.union(&right).count();
    intersection as f64 / union as f64
}

/// Lowercased whitespace tokens, with surrounding punctuation stripped.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// The textual part of a payload: a bare string, or a string-valued
/// `text` / `content` / `message` field of an object.
pub fn payload_text(payload: &Value) -> Option<&str> {
    match payload {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => TEXT_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_str)),
        _ => None,
    }
}

/// Depth past which nesting no longer changes any score.
pub const MAX_PAYLOAD_DEPTH: usize = 8;

/// Nesting depth of a structured payload, capped at [`MAX_PAYLOAD_DEPTH`].
/// Scalars are depth 0.
pub fn payload_depth(payload: &Value) -> usize {
    depth_within(payload, MAX_PAYLOAD_DEPTH)
}

fn depth_within(value: &Value, budget: usize) -> usize {
    if budget == 0 {
        return 0;
    }
    let inner = |v: &Value| depth_within(v, budget - 1);
    match value {
        Value::Array(items) => 1 + items.iter().map(inner).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(inner).max().unwrap_or(0),
        _ => 0,
    }
}
