//! The session store orchestrator.
//!
//! Each update works on an owned copy of the session: load, mutate, save
//! once, then publish. A failed save leaves the persisted record as it was
//! and publishes nothing.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use liminal_analysis::math::clamp_unit;
use liminal_analysis::terma::RevealSnapshot;
use liminal_analysis::{
    AwarenessAnalyzer, CoherenceCalculator, DriftDetector, ObstacleDetector, TermaEngine,
};
use liminal_core::config::StorageConfig;
use liminal_core::{
    CoherenceResult, DriftEvent, Envelope, ISessionStorage, LiminalConfig, LiminalError,
    LiminalResult, Message, MetricsUpdate, RevealConditions, Session, SessionConfig,
    SessionMetrics, SessionStats, Terma,
};
use liminal_observability::tracing_setup::events;
use liminal_storage::{InMemorySessionStorage, SweeperHandle};
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::Instrument;

use crate::events::{DriftNotification, EventBus, TermaRevealedNotification};
use crate::locks::ThreadLocks;
use crate::stats::aggregate_stats;

/// Outcome of one metrics recomputation, published after the save.
#[derive(Debug, Default)]
struct Recomputed {
    drift: Option<DriftEvent>,
    revealed: Vec<Terma>,
}

pub struct SessionStore<S: ISessionStorage = InMemorySessionStorage> {
    storage: Arc<S>,
    config: SessionConfig,
    coherence: CoherenceCalculator,
    awareness: AwarenessAnalyzer,
    obstacles: ObstacleDetector,
    drift: DriftDetector,
    termas: TermaEngine,
    bus: EventBus,
    locks: ThreadLocks,
}

impl SessionStore<InMemorySessionStorage> {
    /// A store over process-local storage.
    pub fn new(config: SessionConfig) -> LiminalResult<Self> {
        Self::with_storage(config, InMemorySessionStorage::new())
    }

    /// A store over process-local storage, configured from the root config.
    pub fn from_config(config: &LiminalConfig) -> LiminalResult<Self> {
        config.storage.validate()?;
        Self::new(config.session.clone())
    }

    /// Sweep expired sessions every `interval` until the handle is dropped.
    pub fn spawn_sweeper(&self, interval: Duration) -> SweeperHandle {
        self.storage
            .spawn_sweeper(interval, self.config.session_ttl_std())
    }

    /// Sweep on the configured `sweep_interval_secs`.
    pub fn spawn_sweeper_from(&self, config: &StorageConfig) -> SweeperHandle {
        self.spawn_sweeper(Duration::from_secs(config.sweep_interval_secs.max(1)))
    }
}

impl<S: ISessionStorage> SessionStore<S> {
    pub fn with_storage(config: SessionConfig, storage: S) -> LiminalResult<Self> {
        Self::with_shared_storage(config, Arc::new(storage))
    }

    /// Share one storage instance between several stores.
    pub fn with_shared_storage(config: SessionConfig, storage: Arc<S>) -> LiminalResult<Self> {
        config.validate()?;
        Ok(Self {
            storage,
            coherence: CoherenceCalculator::new(config.coherence_window),
            awareness: AwarenessAnalyzer::new(),
            obstacles: ObstacleDetector::new(),
            drift: DriftDetector::from_config(&config),
            termas: TermaEngine::new(),
            bus: EventBus::new(),
            locks: ThreadLocks::new(),
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe_drift(&self) -> broadcast::Receiver<DriftNotification> {
        self.bus.subscribe_drift()
    }

    pub fn subscribe_terma_revealed(&self) -> broadcast::Receiver<TermaRevealedNotification> {
        self.bus.subscribe_terma_revealed()
    }

    /// Append a message stamped now.
    pub async fn store(
        &self,
        thread_id: &str,
        envelope: Envelope,
        payload: Option<Value>,
    ) -> LiminalResult<Session> {
        self.store_message(thread_id, Message::new(envelope, payload, Utc::now()))
            .await
    }

    /// Append `message` and recompute the session's metrics.
    ///
    /// The message timestamp is the instant every time-based score and
    /// reveal condition is evaluated at. Expiry is measured from the
    /// wall-clock time of the write, so replayed histories with old
    /// timestamps are kept like live ones.
    pub async fn store_message(&self, thread_id: &str, message: Message) -> LiminalResult<Session> {
        self.append(thread_id, message)
            .instrument(liminal_observability::store_span!(thread_id))
            .await
    }

    async fn append(&self, thread_id: &str, message: Message) -> LiminalResult<Session> {
        let ttl = self.config.session_ttl_std();
        self.storage.cleanup(Utc::now(), ttl).await?;

        let _guard = self.locks.acquire(thread_id).await;
        let now = message.timestamp;
        let written_at = Utc::now();
        let intent = message.envelope.intent_type();

        let mut session = match self.storage.load(thread_id).await? {
            Some(session) => session,
            None => {
                events::session_created(thread_id);
                Session::new(thread_id, written_at)
            }
        };
        session.push_message(message, self.config.max_messages);
        session.touch(written_at);

        let outcome = if session.messages.len() >= 2 {
            self.recompute(&mut session, now)
        } else {
            Recomputed::default()
        };

        self.storage.save(&session, ttl).await?;
        events::message_stored(thread_id, intent.as_str(), session.messages.len());

        if let Some(event) = outcome.drift {
            events::drift_detected(
                thread_id,
                event.event_type.as_str(),
                event.severity.as_str(),
            );
            self.bus.publish_drift(thread_id, event);
        }
        for terma in outcome.revealed {
            events::terma_revealed(thread_id, &terma.id, &terma.category);
            self.bus.publish_terma_revealed(thread_id, terma);
        }
        Ok(session)
    }

    fn recompute(&self, session: &mut Session, now: DateTime<Utc>) -> Recomputed {
        let history: Vec<&Message> = session.messages.iter().collect();
        let _span =
            liminal_observability::analysis_span!(session.thread_id, history.len()).entered();

        let coherence = self.coherence.calculate(&history);
        let awareness = self.awareness.analyze(&history, &coherence, now);
        let obstacles = self.obstacles.detect(&history);
        let previous = session.metrics.coherence;

        let drift = self
            .drift
            .detect(&session.thread_id, &previous, &coherence, &history, now);

        let revealed = match history.last() {
            Some(&trigger) => {
                let snapshot = RevealSnapshot {
                    trigger,
                    coherence: &coherence,
                    awareness: &awareness,
                    obstacles: &obstacles,
                    now,
                };
                self.termas
                    .reveal_ready(&mut session.metrics.termas, &snapshot)
            }
            None => Vec::new(),
        };

        let metrics = &mut session.metrics;
        metrics.previous_coherence = Some(previous);
        metrics.coherence = coherence;
        metrics.awareness = awareness;
        metrics.obstacles = obstacles;
        metrics.updated_at = now;
        if let Some(event) = &drift {
            metrics.drift_events.push(event.clone());
        }
        session.coherence = coherence.overall;

        Recomputed { drift, revealed }
    }

    pub async fn get_session(&self, thread_id: &str) -> LiminalResult<Option<Session>> {
        self.storage.load(thread_id).await
    }

    pub async fn get_metrics(&self, thread_id: &str) -> LiminalResult<Option<SessionMetrics>> {
        Ok(self.storage.load(thread_id).await?.map(|s| s.metrics))
    }

    /// Override coherence and/or the drift log with externally computed values.
    ///
    /// A new coherence pushes the current one into `previous_coherence`.
    /// Returns `None` when the session does not exist.
    pub async fn update_metrics(
        &self,
        thread_id: &str,
        update: MetricsUpdate,
    ) -> LiminalResult<Option<SessionMetrics>> {
        let _guard = self.locks.acquire(thread_id).await;
        let Some(mut session) = self.storage.load(thread_id).await? else {
            return Ok(None);
        };

        if let Some(coherence) = update.coherence {
            let coherence = clamp_coherence(coherence);
            session.metrics.previous_coherence = Some(session.metrics.coherence);
            session.metrics.coherence = coherence;
            session.coherence = coherence.overall;
        }
        if let Some(mut drift_events) = update.drift_events {
            for event in &mut drift_events {
                event.thread_id = thread_id.to_string();
            }
            session.metrics.drift_events = drift_events;
        }
        let written_at = Utc::now();
        session.metrics.updated_at = written_at;
        session.touch(written_at);

        self.storage
            .save(&session, self.config.session_ttl_std())
            .await?;
        Ok(Some(session.metrics))
    }

    pub async fn get_all_sessions(&self) -> LiminalResult<Vec<Session>> {
        self.storage.load_all().await
    }

    /// Delete a session. Waits for any in-flight update of the thread.
    pub async fn delete_session(&self, thread_id: &str) -> LiminalResult<bool> {
        let guard = self.locks.acquire(thread_id).await;
        let deleted = self.storage.delete(thread_id).await;
        drop(guard);
        self.locks.remove_idle(thread_id);
        deleted
    }

    pub async fn clear(&self) -> LiminalResult<()> {
        self.storage.clear().await?;
        self.locks.prune();
        Ok(())
    }

    /// Hide an insight in the session, snapshotting its current context.
    ///
    /// The terma is stamped on the session's message clock (the last
    /// message's timestamp), the clock reveal conditions are checked on.
    pub async fn hide_terma(
        &self,
        thread_id: &str,
        category: &str,
        content: &str,
        conditions: RevealConditions,
        priority: u32,
    ) -> LiminalResult<Terma> {
        self.hide_terma_inner(thread_id, category, content, conditions, priority, None)
            .await
    }

    /// Like [`hide_terma`](Self::hide_terma), stamped at an explicit instant.
    pub async fn hide_terma_at(
        &self,
        thread_id: &str,
        category: &str,
        content: &str,
        conditions: RevealConditions,
        priority: u32,
        hidden_at: DateTime<Utc>,
    ) -> LiminalResult<Terma> {
        self.hide_terma_inner(thread_id, category, content, conditions, priority, Some(hidden_at))
            .await
    }

    async fn hide_terma_inner(
        &self,
        thread_id: &str,
        category: &str,
        content: &str,
        conditions: RevealConditions,
        priority: u32,
        hidden_at: Option<DateTime<Utc>>,
    ) -> LiminalResult<Terma> {
        let _guard = self.locks.acquire(thread_id).await;
        let mut session =
            self.storage
                .load(thread_id)
                .await?
                .ok_or_else(|| LiminalError::SessionNotFound {
                    thread_id: thread_id.to_string(),
                })?;

        let hidden_at = hidden_at
            .or_else(|| session.last_message().map(|m| m.timestamp))
            .unwrap_or_else(Utc::now);
        let terma = self
            .termas
            .conceal(&session, category, content, conditions, priority, hidden_at);
        session.metrics.termas.push(terma.clone());
        session.touch(Utc::now());

        self.storage
            .save(&session, self.config.session_ttl_std())
            .await?;
        events::terma_hidden(thread_id, &terma.id, &terma.category);
        Ok(terma)
    }

    /// The session's termas, highest priority first.
    pub async fn get_termas(
        &self,
        thread_id: &str,
        include_revealed: bool,
    ) -> LiminalResult<Option<Vec<Terma>>> {
        Ok(self.storage.load(thread_id).await?.map(|session| {
            let mut termas: Vec<Terma> = session
                .metrics
                .termas
                .into_iter()
                .filter(|t| include_revealed || !t.revealed)
                .collect();
            termas.sort_by(|a, b| b.priority.cmp(&a.priority));
            termas
        }))
    }

    pub async fn get_revealed_termas(&self, thread_id: &str) -> LiminalResult<Option<Vec<Terma>>> {
        Ok(self
            .get_termas(thread_id, true)
            .await?
            .map(|termas| termas.into_iter().filter(|t| t.revealed).collect()))
    }

    pub async fn get_stats(&self) -> LiminalResult<SessionStats> {
        let sessions = self.storage.load_all().await?;
        Ok(aggregate_stats(&sessions))
    }

    /// Run one expiry pass now. Returns how many sessions were removed.
    pub async fn cleanup(&self) -> LiminalResult<usize> {
        self.cleanup_at(Utc::now()).await
    }

    /// Run one expiry pass as of `now`.
    pub async fn cleanup_at(&self, now: DateTime<Utc>) -> LiminalResult<usize> {
        let removed = self
            .storage
            .cleanup(now, self.config.session_ttl_std())
            .instrument(liminal_observability::cleanup_span!())
            .await?;
        self.locks.prune();
        Ok(removed)
    }
}

fn clamp_coherence(c: CoherenceResult) -> CoherenceResult {
    CoherenceResult {
        overall: clamp_unit(c.overall),
        intent_similarity: clamp_unit(c.intent_similarity),
        affect_stability: clamp_unit(c.affect_stability),
        semantic_alignment: clamp_unit(c.semantic_alignment),
    }
}
