use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Envelope;

/// A message inside a session: the envelope, an opaque payload, and its arrival time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub envelope: Envelope,
    #[serde(default)]
    pub payload: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(envelope: Envelope, payload: Option<Value>, timestamp: DateTime<Utc>) -> Self {
        Self {
            envelope,
            payload,
            timestamp,
        }
    }
}
