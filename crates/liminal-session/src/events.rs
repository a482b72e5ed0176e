//! Typed notification channels.
//!
//! Publishing never blocks and never fails: with no subscribers the payload
//! is dropped, and a subscriber that falls behind by more than the channel
//! capacity sees `RecvError::Lagged` instead of slowing the store down.

use liminal_core::{DriftEvent, Terma};
use tokio::sync::broadcast;

/// Buffered notifications per channel before slow subscribers lag.
pub const CHANNEL_CAPACITY: usize = 256;

/// Published on the `drift` channel.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftNotification {
    pub thread_id: String,
    pub event: DriftEvent,
}

/// Published on the `terma_revealed` channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TermaRevealedNotification {
    pub thread_id: String,
    pub terma: Terma,
}

#[derive(Debug, Clone)]
pub struct EventBus {
    drift: broadcast::Sender<DriftNotification>,
    terma_revealed: broadcast::Sender<TermaRevealedNotification>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (drift, _) = broadcast::channel(capacity);
        let (terma_revealed, _) = broadcast::channel(capacity);
        Self {
            drift,
            terma_revealed,
        }
    }

    /// Subscribe to drift notifications. Dropping the receiver unsubscribes.
    pub fn subscribe_drift(&self) -> broadcast::Receiver<DriftNotification> {
        self.drift.subscribe()
    }

    /// Subscribe to reveal notifications. Dropping the receiver unsubscribes.
    pub fn subscribe_terma_revealed(&self) -> broadcast::Receiver<TermaRevealedNotification> {
        self.terma_revealed.subscribe()
    }

    pub fn publish_drift(&self, thread_id: &str, event: DriftEvent) {
        let _ = self.drift.send(DriftNotification {
            thread_id: thread_id.to_string(),
            event,
        });
    }

    pub fn publish_terma_revealed(&self, thread_id: &str, terma: Terma) {
        let _ = self.terma_revealed.send(TermaRevealedNotification {
            thread_id: thread_id.to_string(),
            terma,
        });
    }

    pub fn drift_subscribers(&self) -> usize {
        self.drift.receiver_count()
    }

    pub fn terma_revealed_subscribers(&self) -> usize {
        self.terma_revealed.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use liminal_core::{DriftEventType, DriftSeverity};

    fn event() -> DriftEvent {
        DriftEvent {
            thread_id: "t1".to_string(),
            event_type: DriftEventType::TopicShift,
            severity: DriftSeverity::Medium,
            timestamp: Utc::now(),
            details: None,
        }
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish_drift("t1", event());
        assert_eq!(bus.drift_subscribers(), 0);
    }

    #[test]
    fn every_subscriber_receives_a_copy() {
        let bus = EventBus::new();
        let mut a = bus.subscribe_drift();
        let mut b = bus.subscribe_drift();
        bus.publish_drift("t1", event());

        assert_eq!(a.try_recv().unwrap().thread_id, "t1");
        assert_eq!(b.try_recv().unwrap().event.event_type, DriftEventType::TopicShift);
    }

    #[test]
    fn dropping_receiver_unsubscribes() {
        let bus = EventBus::new();
        let rx = bus.subscribe_terma_revealed();
        assert_eq!(bus.terma_revealed_subscribers(), 1);
        drop(rx);
        assert_eq!(bus.terma_revealed_subscribers(), 0);
    }
}
