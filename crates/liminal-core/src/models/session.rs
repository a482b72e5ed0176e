use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;
use super::metrics::SessionMetrics;

/// Complete snapshot of one conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique key of the session.
    pub thread_id: String,
    /// Messages in arrival order, oldest first.
    pub messages: VecDeque<Message>,
    /// Current coherence overall, mirrored from `metrics.coherence.overall`.
    pub coherence: f64,
    pub metrics: SessionMetrics,
    pub metadata: SessionMetadata,
}

/// Lifecycle bookkeeping for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

impl Session {
    /// Create an empty session at perfect defaults.
    pub fn new(thread_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            thread_id: thread_id.into(),
            messages: VecDeque::new(),
            coherence: 1.0,
            metrics: SessionMetrics::new(now),
            metadata: SessionMetadata {
                created_at: now,
                updated_at: now,
                message_count: 0,
            },
        }
    }

    /// Append a message, evicting the oldest ones while over `max_messages`.
    ///
    /// Does not touch `updated_at`: a message's timestamp is when it was
    /// said, not when the session was last written.
    pub fn push_message(&mut self, message: Message, max_messages: usize) {
        self.messages.push_back(message);
        while self.messages.len() > max_messages {
            self.messages.pop_front();
        }
        self.metadata.message_count = self.messages.len();
    }

    /// Record a write at wall-clock `now`. Expiry is measured from here.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.metadata.updated_at = now;
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.back()
    }

    /// The last `n` messages, oldest first.
    pub fn tail(&self, n: usize) -> Vec<&Message> {
        let skip = self.messages.len().saturating_sub(n);
        self.messages.iter().skip(skip).collect()
    }

    /// Whether the session has been idle for longer than `ttl` at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now - self.metadata.updated_at > ttl
    }
}
