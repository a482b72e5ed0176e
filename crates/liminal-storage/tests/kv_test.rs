use std::time::Duration;

use chrono::Utc;
use liminal_core::{IKeyValueClient, ISessionStorage, IntentType, Session};
use liminal_storage::{KvSessionStorage, MokaKvClient};
use test_fixtures::{envelope, message_at};

fn storage() -> KvSessionStorage<MokaKvClient> {
    KvSessionStorage::new(MokaKvClient::new(100), "lss:session:")
}

fn session(id: &str) -> Session {
    let now = Utc::now();
    let mut s = Session::new(id, now);
    s.push_message(
        message_at(envelope(IntentType::Tell, "caching", [0.2, 0.1, 0.0]), now, 0),
        10,
    );
    s
}

// ── records ──

#[tokio::test]
async fn records_live_under_prefixed_keys() {
    let storage = storage();
    storage.save(&session("t1"), Duration::from_secs(60)).await.unwrap();

    let raw = storage.client().get("lss:session:t1").await.unwrap();
    assert!(raw.is_some());
    assert_eq!(storage.key("t1"), "lss:session:t1");
}

#[tokio::test]
async fn round_trip_preserves_session() {
    let storage = storage();
    let s = session("t1");
    storage.save(&s, Duration::from_secs(60)).await.unwrap();
    assert_eq!(storage.load("t1").await.unwrap(), Some(s));
}

#[tokio::test]
async fn malformed_record_is_absent() {
    let storage = storage();
    storage.client().insert_raw("lss:session:bad", "{definitely not a session");
    storage.save(&session("good"), Duration::from_secs(60)).await.unwrap();

    assert!(storage.load("bad").await.unwrap().is_none());
    let all = storage.load_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].thread_id, "good");
}

#[tokio::test]
async fn clear_only_touches_prefixed_keys() {
    let storage = storage();
    storage.client().insert_raw("other:key", "keep me");
    storage.save(&session("a"), Duration::from_secs(60)).await.unwrap();
    storage.save(&session("b"), Duration::from_secs(60)).await.unwrap();

    storage.clear().await.unwrap();
    assert!(storage.load_all().await.unwrap().is_empty());
    assert_eq!(
        storage.client().get("other:key").await.unwrap().as_deref(),
        Some("keep me")
    );
}

#[tokio::test]
async fn delete_reports_existence() {
    let storage = storage();
    storage.save(&session("t1"), Duration::from_secs(60)).await.unwrap();
    assert!(storage.delete("t1").await.unwrap());
    assert!(!storage.delete("t1").await.unwrap());
}

// ── native expiry ──

#[tokio::test]
async fn backend_expires_records_after_ttl() {
    let storage = storage();
    storage.save(&session("short"), Duration::from_millis(150)).await.unwrap();
    storage.save(&session("long"), Duration::from_secs(60)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(storage.load("short").await.unwrap().is_none());
    assert!(storage.load("long").await.unwrap().is_some());
}

#[tokio::test]
async fn rewrite_refreshes_ttl() {
    let storage = storage();
    let s = session("t1");
    storage.save(&s, Duration::from_millis(100)).await.unwrap();
    storage.save(&s, Duration::from_secs(60)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(storage.load("t1").await.unwrap().is_some());
}
