//! Unit tests for SqliteSettingsRepository.
//!
//! Covers read of an absent row, write/read round-trip, overwrite, and clear.

use tempfile::tempdir;

use crate::settings_repo::{SettingsStore, SqliteSettingsRepository};

async fn repo_in(dir: &tempfile::TempDir) -> SqliteSettingsRepository {
    let path = dir.path().join("settings.db");
    SqliteSettingsRepository::new(path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_read_settings_absent_chat_returns_empty() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    let record = repo.read_settings(42).await.expect("Failed to read");

    assert_eq!(record.chat_id, 42);
    assert!(record.llm_memory.is_none());
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    repo.write_settings(7, Some("This chat is about Go concurrency"))
        .await
        .expect("Failed to write");

    let record = repo.read_settings(7).await.expect("Failed to read");
    assert_eq!(
        record.llm_memory.as_deref(),
        Some("This chat is about Go concurrency")
    );
}

#[tokio::test]
async fn test_write_overwrites_previous_value() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    repo.write_settings(7, Some("first")).await.expect("write");
    repo.write_settings(7, Some("second")).await.expect("write");

    let record = repo.read_settings(7).await.expect("read");
    assert_eq!(record.llm_memory.as_deref(), Some("second"));
}

#[tokio::test]
async fn test_write_none_clears_memory() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    repo.write_settings(7, Some("keep this")).await.expect("write");
    repo.write_settings(7, None).await.expect("clear");

    let record = repo.read_settings(7).await.expect("read");
    assert!(record.llm_memory.is_none());
}

#[tokio::test]
async fn test_chats_are_isolated() {
    let dir = tempdir().expect("tempdir");
    let repo = repo_in(&dir).await;

    repo.write_settings(1, Some("alpha")).await.expect("write");
    repo.write_settings(2, Some("beta")).await.expect("write");

    let a = repo.read_settings(1).await.expect("read");
    let b = repo.read_settings(2).await.expect("read");
    assert_eq!(a.llm_memory.as_deref(), Some("alpha"));
    assert_eq!(b.llm_memory.as_deref(), Some("beta"));
}
