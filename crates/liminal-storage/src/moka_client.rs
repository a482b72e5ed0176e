//! Embedded key-value client.
//!
//! Uses `moka::sync::Cache` with a per-entry `Expiry`, so every `set`
//! carries its own TTL the way `SET key value PX ttl` does on a networked
//! cache.

use std::time::{Duration, Instant};

use liminal_core::config::StorageConfig;
use liminal_core::{IKeyValueClient, LiminalResult};
use moka::sync::Cache;
use moka::Expiry;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was last written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        entry.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        entry.ttl
    }
}

#[derive(Clone)]
pub struct MokaKvClient {
    cache: Cache<String, Entry>,
}

impl MokaKvClient {
    pub fn new(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.max_capacity)
    }

    /// Write a raw value, bypassing any codec. Used to seed foreign records.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.cache.insert(
            key.into(),
            Entry {
                value: value.into(),
                ttl: None,
            },
        );
    }
}

impl Default for MokaKvClient {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

impl IKeyValueClient for MokaKvClient {
    async fn get(&self, key: &str) -> LiminalResult<Option<String>> {
        Ok(self.cache.get(key).map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> LiminalResult<()> {
        self.cache.insert(key.to_string(), Entry { value, ttl });
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> LiminalResult<usize> {
        Ok(keys
            .iter()
            .filter(|k| self.cache.remove(k.as_str()).is_some())
            .count())
    }

    async fn scan_prefix(&self, prefix: &str) -> LiminalResult<Vec<String>> {
        Ok(self
            .cache
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.as_ref().clone())
            .collect())
    }
}
