use std::time::Duration;

use chrono::Utc;
use liminal_core::{ISessionStorage, IntentType, Session};
use liminal_storage::InMemorySessionStorage;
use test_fixtures::{envelope, message_at};

fn session(id: &str, updated: chrono::DateTime<Utc>) -> Session {
    let mut s = Session::new(id, updated);
    s.push_message(message_at(envelope(IntentType::Ask, "rust", [0.0; 3]), updated, 0), 10);
    s
}

// ── save / load / delete ──

#[tokio::test]
async fn save_then_load_returns_same_session() {
    let storage = InMemorySessionStorage::new();
    let s = session("t1", Utc::now());
    storage.save(&s, Duration::from_secs(60)).await.unwrap();

    assert_eq!(storage.load("t1").await.unwrap(), Some(s));
    assert_eq!(storage.load("missing").await.unwrap(), None);
}

#[tokio::test]
async fn delete_reports_existence() {
    let storage = InMemorySessionStorage::new();
    storage.save(&session("t1", Utc::now()), Duration::from_secs(60)).await.unwrap();

    assert!(storage.delete("t1").await.unwrap());
    assert!(!storage.delete("t1").await.unwrap());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn load_all_and_clear() {
    let storage = InMemorySessionStorage::new();
    for id in ["a", "b", "c"] {
        storage.save(&session(id, Utc::now()), Duration::from_secs(60)).await.unwrap();
    }
    let mut ids: Vec<String> = storage
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.thread_id)
        .collect();
    ids.sort();
    assert_eq!(ids, ["a", "b", "c"]);

    storage.clear().await.unwrap();
    assert!(storage.load_all().await.unwrap().is_empty());
}

// ── expiry ──

#[tokio::test]
async fn cleanup_removes_only_idle_sessions() {
    let storage = InMemorySessionStorage::new();
    let now = Utc::now();
    storage
        .save(&session("stale", now - chrono::Duration::minutes(10)), Duration::from_secs(60))
        .await
        .unwrap();
    storage.save(&session("fresh", now), Duration::from_secs(60)).await.unwrap();

    let removed = storage.cleanup(now, Duration::from_secs(60)).await.unwrap();
    assert_eq!(removed, 1);
    assert!(storage.load("stale").await.unwrap().is_none());
    assert!(storage.load("fresh").await.unwrap().is_some());
}

#[tokio::test]
async fn sweeper_evicts_in_background() {
    let storage = InMemorySessionStorage::new();
    let old = Utc::now() - chrono::Duration::seconds(5);
    storage.save(&session("stale", old), Duration::from_secs(1)).await.unwrap();

    let handle = storage.spawn_sweeper(Duration::from_millis(20), Duration::from_secs(1));
    assert!(handle.is_running());
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(storage.is_empty());
    handle.shutdown();
}
