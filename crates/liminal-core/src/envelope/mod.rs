//! Read-only view of the context envelope consumed by the session store.
//!
//! Structural validation, signing, and wire encodings are handled upstream;
//! this crate only reads intent, affect, topic, and policy. Fields it does
//! not interpret are carried through `extra` so persisted records keep them.

mod affect;

pub use affect::{Affect, Pad};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::intent::IntentType;

/// Envelope schema version understood by this crate.
pub const ENVELOPE_VERSION: u8 = 1;

/// A validated message-context envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default = "default_version")]
    pub v: u8,
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affect: Option<Affect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<Meaning>,
    pub policy: Policy,
    /// Envelope sections this crate does not interpret (trust, qos, trace, sig, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_version() -> u8 {
    ENVELOPE_VERSION
}

/// Communicative intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// Semantic meaning context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology: Option<String>,
}

/// Consent marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentLevel {
    Private,
    Team,
    Public,
}

/// Privacy and consent policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub consent: ConsentLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<Vec<String>>,
}

impl Envelope {
    /// Minimal private envelope with the given intent.
    pub fn new(intent: IntentType) -> Self {
        Self {
            v: ENVELOPE_VERSION,
            intent: Intent {
                kind: intent,
                goal: None,
            },
            affect: None,
            meaning: None,
            policy: Policy {
                consent: ConsentLevel::Private,
                share: None,
            },
            extra: Map::new(),
        }
    }

    /// Set the meaning topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.meaning.get_or_insert_with(Meaning::default).topic = Some(topic.into());
        self
    }

    /// Set the PAD affect vector.
    pub fn with_pad(mut self, pad: Pad) -> Self {
        self.affect.get_or_insert_with(Affect::default).pad = Some(pad);
        self
    }

    /// Set the consent level.
    pub fn with_consent(mut self, consent: ConsentLevel) -> Self {
        self.policy.consent = consent;
        self
    }

    /// The envelope's intent.
    pub fn intent_type(&self) -> IntentType {
        self.intent.kind
    }

    /// The envelope's topic, if any and non-empty.
    pub fn topic(&self) -> Option<&str> {
        self.meaning
            .as_ref()
            .and_then(|m| m.topic.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// The envelope's PAD vector, if present.
    pub fn pad(&self) -> Option<Pad> {
        self.affect.as_ref().and_then(|a| a.pad)
    }
}
