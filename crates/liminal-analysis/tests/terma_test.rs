use chrono::{Duration, Utc};
use liminal_analysis::terma::{conditions_met, topic_similarity, RevealSnapshot};
use liminal_analysis::TermaEngine;
use liminal_core::{
    AwarenessResult, CoherenceResult, IntentType, ObstacleResult, RevealConditions, Session,
};
use test_fixtures::{envelope, message_at};

fn session_about(topic: &str) -> Session {
    let now = Utc::now();
    let mut session = Session::new("t1", now);
    session.push_message(message_at(envelope(IntentType::Ask, topic, [0.0; 3]), now, 0), 100);
    session
}

#[test]
fn conceal_snapshots_current_context() {
    let session = session_about("breath work");
    let now = Utc::now();
    let terma = TermaEngine::new().conceal(
        &session,
        "insight",
        "slow the exhale",
        RevealConditions::default(),
        3,
        now,
    );
    assert!(!terma.revealed);
    assert_eq!(terma.context.topic.as_deref(), Some("breath work"));
    assert_eq!(terma.context.intent, Some(IntentType::Ask));
    assert_eq!(terma.context.coherence, 1.0);
    assert_eq!(terma.context.obstacles, 0.0);
    assert_eq!(terma.context.hidden_at, now);
    assert_eq!(terma.priority, 3);
}

#[test]
fn all_conditions_must_hold() {
    let engine = TermaEngine::new();
    let hidden_at = Utc::now();
    let session = session_about("breath work");
    let conditions = RevealConditions::default()
        .min_elapsed_ms(1_000)
        .min_coherence(0.7)
        .max_obstacles(0.3)
        .intents([IntentType::Reflect])
        .min_topic_similarity(0.3);
    let mut termas = vec![engine.conceal(&session, "insight", "x", conditions, 1, hidden_at)];

    let coherence = CoherenceResult::default();
    let awareness = AwarenessResult::default();
    let obstacles = ObstacleResult::default();

    // Wrong intent: nothing revealed.
    let trigger = message_at(envelope(IntentType::Tell, "deep breath work", [0.0; 3]), hidden_at, 5);
    let snapshot = RevealSnapshot {
        trigger: &trigger,
        coherence: &coherence,
        awareness: &awareness,
        obstacles: &obstacles,
        now: hidden_at + Duration::seconds(5),
    };
    assert!(engine.reveal_ready(&mut termas, &snapshot).is_empty());

    // Too early: nothing revealed.
    let trigger = message_at(envelope(IntentType::Reflect, "deep breath work", [0.0; 3]), hidden_at, 0);
    let early = RevealSnapshot {
        trigger: &trigger,
        now: hidden_at + Duration::milliseconds(500),
        ..snapshot
    };
    assert!(engine.reveal_ready(&mut termas, &early).is_empty());

    // Everything holds.
    let ready = RevealSnapshot {
        trigger: &trigger,
        now: hidden_at + Duration::seconds(2),
        ..snapshot
    };
    let revealed = engine.reveal_ready(&mut termas, &ready);
    assert_eq!(revealed.len(), 1);
    assert!(termas[0].revealed);
    assert_eq!(termas[0].revealed_at, Some(hidden_at + Duration::seconds(2)));

    // Already revealed termas are not revealed again.
    assert!(engine.reveal_ready(&mut termas, &ready).is_empty());
}

#[test]
fn metric_thresholds_gate_reveal() {
    let engine = TermaEngine::new();
    let now = Utc::now();
    let session = session_about("focus");
    let terma = engine.conceal(
        &session,
        "guidance",
        "pause",
        RevealConditions::default().min_awareness(0.9),
        1,
        now,
    );
    let trigger = message_at(envelope(IntentType::Tell, "focus", [0.0; 3]), now, 1);
    let coherence = CoherenceResult::default();
    let obstacles = ObstacleResult::default();
    let low = AwarenessResult {
        overall: 0.5,
        ..AwarenessResult::default()
    };
    let snapshot = RevealSnapshot {
        trigger: &trigger,
        coherence: &coherence,
        awareness: &low,
        obstacles: &obstacles,
        now,
    };
    assert!(!conditions_met(&terma, &snapshot));

    let high = AwarenessResult::default();
    assert!(conditions_met(
        &terma,
        &RevealSnapshot {
            awareness: &high,
            ..snapshot
        }
    ));
}

#[test]
fn topic_similarity_is_jaccard_over_tokens() {
    assert!((topic_similarity(Some("Breath Work"), Some("breath work")) - 1.0).abs() < 1e-12);
    assert!((topic_similarity(Some("breath work"), Some("breath control")) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(topic_similarity(None, Some("breath")), 0.0);
}
