//! Key-value session storage.
//!
//! Each session is one JSON record under `{prefix}{thread_id}`, written with
//! the session TTL so the backend expires idle sessions itself. A record
//! that fails to decode is logged and treated as absent.

use std::time::Duration;

use liminal_core::config::StorageConfig;
use liminal_core::{IKeyValueClient, ISessionStorage, LiminalResult, Session};
use liminal_observability::tracing_setup::events;

use crate::record::{decode_session, encode_session};

pub struct KvSessionStorage<C> {
    client: C,
    prefix: String,
}

impl<C: IKeyValueClient> KvSessionStorage<C> {
    pub fn new(client: C, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    pub fn from_config(client: C, config: &StorageConfig) -> Self {
        Self::new(client, config.key_prefix.clone())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn key(&self, thread_id: &str) -> String {
        format!("{}{}", self.prefix, thread_id)
    }

    async fn read(&self, key: &str) -> LiminalResult<Option<Session>> {
        let Some(raw) = self.client.get(key).await? else {
            return Ok(None);
        };
        match decode_session(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                events::record_discarded(key, &e.to_string());
                Ok(None)
            }
        }
    }
}

impl<C: IKeyValueClient> ISessionStorage for KvSessionStorage<C> {
    async fn load(&self, thread_id: &str) -> LiminalResult<Option<Session>> {
        self.read(&self.key(thread_id)).await
    }

    async fn save(&self, session: &Session, ttl: Duration) -> LiminalResult<()> {
        let raw = encode_session(session)?;
        self.client
            .set(&self.key(&session.thread_id), raw, Some(ttl))
            .await
    }

    async fn delete(&self, thread_id: &str) -> LiminalResult<bool> {
        let removed = self.client.delete(&[self.key(thread_id)]).await?;
        Ok(removed > 0)
    }

    async fn load_all(&self) -> LiminalResult<Vec<Session>> {
        let keys = self.client.scan_prefix(&self.prefix).await?;
        let mut sessions = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(session) = self.read(&key).await? {
                sessions.push(session);
            }
        }
        Ok(sessions)
    }

    async fn clear(&self) -> LiminalResult<()> {
        let keys = self.client.scan_prefix(&self.prefix).await?;
        if !keys.is_empty() {
            self.client.delete(&keys).await?;
        }
        Ok(())
    }
}
