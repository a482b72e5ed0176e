//! Conversation fixtures and envelope builders shared by the workspace tests.
//!
//! Fixture files live in `conversations/` as JSON. Each message carries an
//! offset in seconds from a base time chosen by the test, so scenarios can be
//! replayed at any point in time.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use liminal_core::{Envelope, IntentType, Message, Pad};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the conversation fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conversations")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A scripted conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub messages: Vec<ScriptedMessage>,
}

/// One message of a scripted conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedMessage {
    pub envelope: Envelope,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    /// Seconds after the conversation's base time.
    pub offset_secs: i64,
}

impl Conversation {
    /// Materialize the messages relative to `base`.
    pub fn messages_at(&self, base: DateTime<Utc>) -> Vec<Message> {
        self.messages
            .iter()
            .map(|m| {
                Message::new(
                    m.envelope.clone(),
                    m.payload.clone(),
                    base + Duration::seconds(m.offset_secs),
                )
            })
            .collect()
    }

    /// Timestamp of the last message relative to `base`.
    pub fn ends_at(&self, base: DateTime<Utc>) -> DateTime<Utc> {
        let last = self.messages.last().map(|m| m.offset_secs).unwrap_or(0);
        base + Duration::seconds(last)
    }
}

/// Load a conversation from `conversations/<name>.json`.
pub fn load_conversation(name: &str) -> Conversation {
    load_fixture(&format!("{name}.json"))
}

/// Five evenly spaced ask/tell messages about meditation with constant affect.
pub fn scenario_a() -> Conversation {
    load_conversation("scenario_a_meditation")
}

/// Five messages, five unrelated topics, widely spread affect.
pub fn scenario_b() -> Conversation {
    load_conversation("scenario_b_scattered")
}

/// Envelope with intent, topic, and PAD set.
pub fn envelope(intent: IntentType, topic: &str, pad: [f64; 3]) -> Envelope {
    Envelope::new(intent)
        .with_topic(topic)
        .with_pad(Pad::from(pad))
}

/// Message at `base + offset_secs`.
pub fn message_at(envelope: Envelope, base: DateTime<Utc>, offset_secs: i64) -> Message {
    Message::new(envelope, None, base + Duration::seconds(offset_secs))
}
