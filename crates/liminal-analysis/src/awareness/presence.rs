use chrono::{DateTime, Utc};
use liminal_core::Message;

use crate::math::{mean, variance};

/// Minutes for the recency score to fall to 1/e.
const RECENCY_DECAY_MINUTES: f64 = 10.0;

/// Mean of recency and timing consistency.
///
/// - recency: `exp(-ageMinutes / 10)` for the newest message
/// - timing: `exp(-var(intervals) / (mean(intervals)² + 1))`, intervals in seconds
///
/// Range: 0.0 – 1.0.
pub fn calculate(messages: &[&Message], now: DateTime<Utc>) -> f64 {
    (recency(messages, now) + timing_consistency(messages)) / 2.0
}

/// Recency of the newest message. Empty history → 0.0.
pub fn recency(messages: &[&Message], now: DateTime<Utc>) -> f64 {
    let Some(last) = messages.last() else {
        return 0.0;
    };
    let age_minutes = ((now - last.timestamp).num_milliseconds().max(0)) as f64 / 60_000.0;
    (-age_minutes / RECENCY_DECAY_MINUTES).exp()
}

/// Regularity of inter-arrival gaps. No gaps → 1.0.
pub fn timing_consistency(messages: &[&Message]) -> f64 {
    let intervals: Vec<f64> = messages
        .windows(2)
        .map(|pair| (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64 / 1_000.0)
        .collect();
    if intervals.is_empty() {
        return 1.0;
    }
    let m = mean(&intervals);
    (-variance(&intervals) / (m * m + 1.0)).exp()
}
