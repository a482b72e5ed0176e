//! Drift detection between successive coherence snapshots.
//!
//! At most one event is produced per update. `coherence_drop` is evaluated
//! first and, when it fires, `topic_shift` is not evaluated at all.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use liminal_core::{
    CoherenceResult, DriftDetails, DriftEvent, DriftEventType, DriftSeverity, Message,
    SessionConfig,
};

use crate::window;

/// Drops above this are high severity.
const HIGH_DROP: f64 = 0.4;
/// Drops above this are medium severity.
const MEDIUM_DROP: f64 = 0.25;
/// Distinct topics in the shift window that count as a shift.
const TOPIC_SHIFT_MIN_DISTINCT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct DriftDetector {
    min_coherence: f64,
    drop_threshold: f64,
    topic_shift_window: usize,
}

impl DriftDetector {
    pub fn new(min_coherence: f64, drop_threshold: f64, topic_shift_window: usize) -> Self {
        Self {
            min_coherence,
            drop_threshold,
            topic_shift_window,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.drift_min_coherence,
            config.drift_drop_threshold,
            config.topic_shift_window,
        )
    }

    /// Compare `previous` and `current` coherence and inspect recent topics.
    pub fn detect(
        &self,
        thread_id: &str,
        previous: &CoherenceResult,
        current: &CoherenceResult,
        history: &[&Message],
        now: DateTime<Utc>,
    ) -> Option<DriftEvent> {
        self.coherence_drop(thread_id, previous, current, now)
            .or_else(|| self.topic_shift(thread_id, history, now))
    }

    /// Fires iff `current < min_coherence` and `previous − current ≥ drop_threshold`.
    pub fn coherence_drop(
        &self,
        thread_id: &str,
        previous: &CoherenceResult,
        current: &CoherenceResult,
        now: DateTime<Utc>,
    ) -> Option<DriftEvent> {
        let drop = previous.overall - current.overall;
        if current.overall >= self.min_coherence || drop < self.drop_threshold {
            return None;
        }
        Some(DriftEvent {
            thread_id: thread_id.to_string(),
            event_type: DriftEventType::CoherenceDrop,
            severity: drop_severity(drop),
            timestamp: now,
            details: Some(DriftDetails::CoherenceDrop {
                previous: previous.overall,
                current: current.overall,
            }),
        })
    }

    /// Fires when the last `topic_shift_window` messages carry at least three distinct topics.
    pub fn topic_shift(
        &self,
        thread_id: &str,
        history: &[&Message],
        now: DateTime<Utc>,
    ) -> Option<DriftEvent> {
        let topics: Vec<String> = window(history, self.topic_shift_window)
            .iter()
            .filter_map(|m| m.envelope.topic())
            .map(str::to_string)
            .collect();
        let unique_topics = topics.iter().collect::<HashSet<_>>().len();
        if unique_topics < TOPIC_SHIFT_MIN_DISTINCT {
            return None;
        }
        let severity = if unique_topics > TOPIC_SHIFT_MIN_DISTINCT {
            DriftSeverity::High
        } else {
            DriftSeverity::Medium
        };
        Some(DriftEvent {
            thread_id: thread_id.to_string(),
            event_type: DriftEventType::TopicShift,
            severity,
            timestamp: now,
            details: Some(DriftDetails::TopicShift {
                window: topics,
                unique_topics,
            }),
        })
    }
}

impl Default for DriftDetector {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

/// Severity of a coherence drop by magnitude.
pub fn drop_severity(drop: f64) -> DriftSeverity {
    if drop > HIGH_DROP {
        DriftSeverity::High
    } else if drop > MEDIUM_DROP {
        DriftSeverity::Medium
    } else {
        DriftSeverity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_bands() {
        assert_eq!(drop_severity(0.5), DriftSeverity::High);
        assert_eq!(drop_severity(0.4), DriftSeverity::Medium);
        assert_eq!(drop_severity(0.3), DriftSeverity::Medium);
        assert_eq!(drop_severity(0.25), DriftSeverity::Low);
        assert_eq!(drop_severity(0.2), DriftSeverity::Low);
    }
}
