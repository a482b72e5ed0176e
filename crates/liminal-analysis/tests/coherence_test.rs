use chrono::Utc;
use liminal_analysis::coherence::{affect, intent, semantic};
use liminal_analysis::CoherenceCalculator;
use liminal_core::{Envelope, IntentType, Message};
use test_fixtures::{envelope, message_at};

fn refs(messages: &[Message]) -> Vec<&Message> {
    messages.iter().collect()
}

#[test]
fn single_message_is_perfectly_coherent() {
    let base = Utc::now();
    let messages = vec![message_at(envelope(IntentType::Ask, "weather", [0.3, 0.2, 0.1]), base, 0)];
    let result = CoherenceCalculator::default().calculate(&refs(&messages));
    assert_eq!(result.overall, 1.0);
    assert_eq!(result.intent_similarity, 1.0);
}

#[test]
fn identical_consecutive_messages_score_above_point_nine() {
    let base = Utc::now();
    let env = envelope(IntentType::Tell, "weather", [0.3, 0.2, 0.1]);
    let messages = vec![message_at(env.clone(), base, 0), message_at(env, base, 5)];
    let result = CoherenceCalculator::default().calculate(&refs(&messages));
    assert!(result.overall > 0.9, "got {}", result.overall);
}

#[test]
fn consistent_conversation_scores_high() {
    let base = Utc::now();
    let messages = vec![
        message_at(envelope(IntentType::Ask, "weather", [0.3, 0.2, 0.1]), base, 0),
        message_at(envelope(IntentType::Tell, "weather", [0.3, 0.2, 0.1]), base, 5),
        message_at(envelope(IntentType::Ask, "weather", [0.3, 0.2, 0.1]), base, 10),
    ];
    let result = CoherenceCalculator::default().calculate(&refs(&messages));
    assert!(result.overall > 0.7, "got {}", result.overall);
    assert_eq!(result.semantic_alignment, 1.0);
    assert!((result.affect_stability - 1.0).abs() < 1e-12);
}

#[test]
fn inconsistent_conversation_scores_low() {
    let base = Utc::now();
    let messages = vec![
        message_at(envelope(IntentType::Ask, "weather", [0.3, 0.2, 0.1]), base, 0),
        message_at(envelope(IntentType::Plan, "food", [0.8, 0.9, 0.5]), base, 5),
        message_at(envelope(IntentType::Sync, "work", [0.1, 0.1, 0.9]), base, 10),
    ];
    let result = CoherenceCalculator::default().calculate(&refs(&messages));
    assert!(result.overall < 0.5, "got {}", result.overall);
    assert!((result.semantic_alignment - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn only_the_window_is_scored() {
    let base = Utc::now();
    let mut messages = vec![
        message_at(envelope(IntentType::Plan, "finance", [-0.9, 0.9, -0.9]), base, 0),
        message_at(envelope(IntentType::Notify, "cooking", [0.9, -0.9, 0.9]), base, 1),
    ];
    for i in 0..3 {
        messages.push(message_at(
            envelope(IntentType::Tell, "weather", [0.1, 0.1, 0.1]),
            base,
            2 + i,
        ));
    }
    let result = CoherenceCalculator::new(3).calculate(&refs(&messages));
    assert!((result.overall - 1.0).abs() < 1e-9, "got {}", result.overall);
}

#[test]
fn unknown_intent_uses_tell_vector() {
    let base = Utc::now();
    let messages = vec![
        message_at(Envelope::new(IntentType::Tell), base, 0),
        message_at(Envelope::new(IntentType::Unknown), base, 1),
    ];
    assert!((intent::calculate(&refs(&messages)) - 1.0).abs() < 1e-12);
}

#[test]
fn missing_affect_and_topics_default_to_one() {
    let base = Utc::now();
    let messages = vec![
        message_at(Envelope::new(IntentType::Ask), base, 0),
        message_at(Envelope::new(IntentType::Tell), base, 1),
    ];
    assert_eq!(affect::calculate(&refs(&messages)), 1.0);
    assert_eq!(semantic::calculate(&refs(&messages)), 1.0);
}

#[test]
fn affect_stability_decays_with_spread() {
    let base = Utc::now();
    let calm = vec![
        message_at(envelope(IntentType::Tell, "t", [0.1, 0.1, 0.1]), base, 0),
        message_at(envelope(IntentType::Tell, "t", [0.2, 0.1, 0.1]), base, 1),
    ];
    let wild = vec![
        message_at(envelope(IntentType::Tell, "t", [-1.0, -1.0, -1.0]), base, 0),
        message_at(envelope(IntentType::Tell, "t", [1.0, 1.0, 1.0]), base, 1),
    ];
    let calm_score = affect::calculate(&refs(&calm));
    let wild_score = affect::calculate(&refs(&wild));
    assert!(calm_score > wild_score);
    // Per-axis variance of {-1, 1} is 1, so stability is exp(-5).
    assert!((wild_score - (-5.0f64).exp()).abs() < 1e-12);
}
