//! Unit tests for UpdateLogRepository.
//!
//! Covers insert, per-chat filtering, limit, and newest-first ordering.

use tempfile::tempdir;

use crate::models::{UpdateDirection, UpdateRecord};
use crate::update_log::UpdateLogRepository;

async fn repo_in(dir: &tempfile::TempDir) -> UpdateLogRepository {
    let path = dir.path().join("updates.db");
    UpdateLogRepository::new(path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create repository")
}

fn incoming(chat_id: i64, content: &str) -> UpdateRecord {
    UpdateRecord::new(
        chat_id,
        123,
        Some("testuser".to_string()),
        UpdateDirection::Incoming,
        content.to_string(),
    )
}

#[tokio::test]
async fn test_recent_by_chat_filters_other_chats() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    repo.insert(&incoming(1, "in chat one")).await.expect("insert");
    repo.insert(&incoming(2, "in chat two")).await.expect("insert");

    let records = repo.recent_by_chat(1, 10).await.expect("query");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content, "in chat one");
}

#[tokio::test]
async fn test_recent_by_chat_newest_first_with_limit() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    for i in 0..5 {
        repo.insert(&incoming(9, &format!("message {}", i)))
            .await
            .expect("insert");
    }

    let records = repo.recent_by_chat(9, 3).await.expect("query");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].content, "message 4");
    assert_eq!(records[2].content, "message 2");
}

#[tokio::test]
async fn test_recent_by_chat_empty_log() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    let records = repo.recent_by_chat(5, 10).await.expect("query");
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_outgoing_direction_round_trip() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    let record = UpdateRecord::new(3, 0, None, UpdateDirection::Outgoing, "reply".to_string());
    repo.insert(&record).await.expect("insert");

    let records = repo.recent_by_chat(3, 1).await.expect("query");
    assert_eq!(records[0].direction, "outgoing");
    assert_eq!(records[0].user_id, 0);
    assert!(records[0].username.is_none());
}
