use std::future::Future;
use std::time::Duration;

use crate::errors::LiminalResult;

/// The subset of a networked key-value cache the session store needs.
///
/// Values are UTF-8 text. `ttl` maps onto the backend's native per-key
/// expiry (for example `SET key value PX ttl`).
pub trait IKeyValueClient: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = LiminalResult<Option<String>>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> impl Future<Output = LiminalResult<()>> + Send;

    /// Delete the given keys, returning how many existed.
    fn delete(&self, keys: &[String]) -> impl Future<Output = LiminalResult<usize>> + Send;

    /// Every live key starting with `prefix`.
    fn scan_prefix(&self, prefix: &str) -> impl Future<Output = LiminalResult<Vec<String>>> + Send;
}
