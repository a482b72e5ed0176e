use chrono::{Duration, Utc};
use liminal_analysis::{AwarenessAnalyzer, CoherenceCalculator, DriftDetector, ObstacleDetector};
use liminal_core::{CoherenceResult, DriftEventType, Envelope, IntentType, Message, Pad};
use proptest::prelude::*;

fn arb_intent() -> impl Strategy<Value = IntentType> {
    prop::sample::select(IntentType::ALL.to_vec())
}

fn arb_envelope() -> impl Strategy<Value = Envelope> {
    (
        arb_intent(),
        prop::option::of(prop::sample::select(vec![
            "weather", "finance", "meditation", "deploy pipeline", "", "ok",
        ])),
        prop::option::of((-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0)),
    )
        .prop_map(|(intent, topic, pad)| {
            let mut env = Envelope::new(intent);
            if let Some(t) = topic {
                env = env.with_topic(t);
            }
            if let Some((p, a, d)) = pad {
                env = env.with_pad(Pad::new(p, a, d));
            }
            env
        })
}

fn arb_history() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec((arb_envelope(), 0i64..600), 0..25).prop_map(|items| {
        let base = Utc::now();
        let mut offset = 0;
        items
            .into_iter()
            .map(|(env, gap)| {
                offset += gap;
                Message::new(env, None, base + Duration::seconds(offset))
            })
            .collect()
    })
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

proptest! {
    #[test]
    fn every_score_is_within_unit_interval(history in arb_history()) {
        let refs: Vec<&Message> = history.iter().collect();
        let now = history.last().map(|m| m.timestamp).unwrap_or_else(Utc::now);

        let c = CoherenceCalculator::default().calculate(&refs);
        let a = AwarenessAnalyzer::new().analyze(&refs, &c, now);
        let o = ObstacleDetector::new().detect(&refs);

        for score in [
            c.overall, c.intent_similarity, c.affect_stability, c.semantic_alignment,
            a.overall, a.presence, a.clarity, a.distraction, a.engagement,
            o.overall, o.vagueness, o.contradiction, o.semantic_gap, o.comprehension_barrier,
        ] {
            prop_assert!(in_unit(score), "score out of range: {}", score);
        }
    }

    #[test]
    fn coherence_drop_fires_iff_below_floor_and_dropped_enough(
        sequence in prop::collection::vec(0.0f64..=1.0, 2..30),
        min_coherence in 0.0f64..=1.0,
        drop_threshold in 0.0f64..=1.0,
    ) {
        let detector = DriftDetector::new(min_coherence, drop_threshold, 5);
        let now = Utc::now();
        for pair in sequence.windows(2) {
            let previous = CoherenceResult { overall: pair[0], ..CoherenceResult::default() };
            let current = CoherenceResult { overall: pair[1], ..CoherenceResult::default() };
            let expected = pair[1] < min_coherence && (pair[0] - pair[1]) >= drop_threshold;
            let event = detector.detect("t", &previous, &current, &[], now);
            let fired = event
                .as_ref()
                .is_some_and(|e| e.event_type == DriftEventType::CoherenceDrop);
            prop_assert_eq!(fired, expected);
        }
    }
}
