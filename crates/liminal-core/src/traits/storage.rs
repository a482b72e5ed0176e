use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::errors::LiminalResult;
use crate::models::Session;

/// Persistence contract for session records.
///
/// One instance is shared by every session of a store, so implementations
/// must tolerate concurrent calls for distinct thread ids. A record that can
/// no longer be decoded is reported as absent, not as an error.
pub trait ISessionStorage: Send + Sync {
    fn load(&self, thread_id: &str) -> impl Future<Output = LiminalResult<Option<Session>>> + Send;

    /// Insert or replace the record. Backends with native expiry apply `ttl`.
    fn save(&self, session: &Session, ttl: Duration)
        -> impl Future<Output = LiminalResult<()>> + Send;

    /// Remove the record. Returns whether it existed.
    fn delete(&self, thread_id: &str) -> impl Future<Output = LiminalResult<bool>> + Send;

    fn load_all(&self) -> impl Future<Output = LiminalResult<Vec<Session>>> + Send;

    fn clear(&self) -> impl Future<Output = LiminalResult<()>> + Send;

    /// Drop records idle for longer than `ttl` at `now`, returning how many
    /// were removed. Backends with native expiry keep the default no-op.
    fn cleanup(
        &self,
        _now: DateTime<Utc>,
        _ttl: Duration,
    ) -> impl Future<Output = LiminalResult<usize>> + Send {
        async { Ok(0) }
    }
}
