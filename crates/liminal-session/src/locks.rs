//! Per-thread update locks.
//!
//! Every read-modify-write of one session runs under that thread's lock, so
//! two concurrent updates of the same thread cannot lose each other's
//! writes. Updates of different threads never contend. The guarantee is
//! process-local; two processes sharing a networked backend can still race.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct ThreadLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ThreadLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `thread_id`.
    pub async fn acquire(&self, thread_id: &str) -> OwnedMutexGuard<()> {
        // Clone out of the map so no shard lock is held across the await.
        let lock = self
            .locks
            .entry(thread_id.to_string())
            .or_default()
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock for `thread_id` unless someone holds or waits on it.
    pub fn remove_idle(&self, thread_id: &str) {
        self.locks
            .remove_if(thread_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Drop locks nobody holds or waits on.
    pub fn prune(&self) {
        self.locks.retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
