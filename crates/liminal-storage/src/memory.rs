//! Process-local session storage.
//!
//! Records never expire on their own. `cleanup` removes sessions idle for
//! longer than the TTL, and [`InMemorySessionStorage::spawn_sweeper`] runs
//! it on an interval until the returned handle is dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use liminal_core::{ISessionStorage, LiminalResult, Session};
use tokio::task::JoinHandle;

use crate::chrono_ttl;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    sessions: Arc<DashMap<String, Session>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired or not.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Remove every record idle for longer than `ttl` at `now`.
    pub fn remove_expired(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let ttl = chrono_ttl(ttl);
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now, ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            liminal_observability::tracing_setup::events::sessions_expired(removed);
        }
        removed
    }

    /// Sweep expired records every `interval` on the current tokio runtime.
    pub fn spawn_sweeper(&self, interval: Duration, ttl: Duration) -> SweeperHandle {
        let storage = self.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                liminal_observability::cleanup_span!()
                    .in_scope(|| storage.remove_expired(Utc::now(), ttl));
            }
        });
        SweeperHandle { task }
    }
}

impl ISessionStorage for InMemorySessionStorage {
    async fn load(&self, thread_id: &str) -> LiminalResult<Option<Session>> {
        Ok(self.sessions.get(thread_id).map(|s| s.value().clone()))
    }

    async fn save(&self, session: &Session, _ttl: Duration) -> LiminalResult<()> {
        self.sessions.insert(session.thread_id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, thread_id: &str) -> LiminalResult<bool> {
        Ok(self.sessions.remove(thread_id).is_some())
    }

    async fn load_all(&self) -> LiminalResult<Vec<Session>> {
        Ok(self.sessions.iter().map(|e| e.value().clone()).collect())
    }

    async fn clear(&self) -> LiminalResult<()> {
        self.sessions.clear();
        Ok(())
    }

    async fn cleanup(&self, now: DateTime<Utc>, ttl: Duration) -> LiminalResult<usize> {
        Ok(self.remove_expired(now, ttl))
    }
}

/// Owns a background sweep task. Dropping it stops the sweeps.
#[derive(Debug)]
pub struct SweeperHandle {
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stop sweeping.
    pub fn shutdown(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
