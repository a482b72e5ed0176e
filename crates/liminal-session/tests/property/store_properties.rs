use liminal_core::{IntentType, Message, SessionConfig};
use liminal_session::SessionStore;
use proptest::prelude::*;
use serde_json::json;
use test_fixtures::{envelope, message_at};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_is_the_last_max_messages_in_order(max in 1usize..12, extra in 0usize..12) {
        let store = SessionStore::new(SessionConfig {
            max_messages: max,
            ..SessionConfig::default()
        })
        .unwrap();
        let base = chrono::Utc::now();
        let total = max + extra;

        let session = runtime().block_on(async {
            let mut last = None;
            for i in 0..total {
                let mut message: Message =
                    message_at(envelope(IntentType::Tell, "x", [0.0; 3]), base, i as i64);
                message.payload = Some(json!(i));
                last = Some(store.store_message("t", message).await.unwrap());
            }
            last.unwrap()
        });

        let kept: Vec<usize> = session
            .messages
            .iter()
            .map(|m| m.payload.as_ref().and_then(|p| p.as_u64()).unwrap() as usize)
            .collect();
        let expected: Vec<usize> = (extra..total).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn stored_scores_stay_in_unit_interval(
        steps in prop::collection::vec(
            (prop::sample::select(IntentType::ALL.to_vec()),
             prop::sample::select(vec!["alpha", "beta", "gamma delta", ""]),
             -1.0f64..=1.0, 0i64..120),
            2..16,
        )
    ) {
        let store = SessionStore::new(SessionConfig::default()).unwrap();
        let base = chrono::Utc::now();
        let session = runtime().block_on(async {
            let mut offset = 0;
            let mut last = None;
            for (intent, topic, p, gap) in steps {
                offset += gap;
                let message = message_at(envelope(intent, topic, [p, -p, p / 2.0]), base, offset);
                last = Some(store.store_message("t", message).await.unwrap());
            }
            last.unwrap()
        });

        let m = &session.metrics;
        for score in [
            session.coherence,
            m.coherence.overall, m.awareness.overall, m.awareness.presence,
            m.awareness.clarity, m.awareness.distraction, m.awareness.engagement,
            m.obstacles.overall, m.obstacles.vagueness, m.obstacles.contradiction,
            m.obstacles.semantic_gap, m.obstacles.comprehension_barrier,
        ] {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
