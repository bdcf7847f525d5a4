//! Chat settings repository: the persistence boundary for per-chat settings.
//!
//! [`SettingsStore`] is the narrow interface the bot writes memory through;
//! [`SqliteSettingsRepository`] is the SQLite implementation. Every call
//! acquires a pooled connection for its own duration and releases it on all
//! exit paths (the connection is returned to the pool when dropped).

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::ChatSettingsRecord;
use crate::sqlite_pool::SqlitePoolManager;

/// Read/write access to one chat's settings row.
///
/// `write_settings` with `None` stores NULL (memory not set). Implementations
/// must apply each write as a single atomic statement so concurrent readers
/// observe either the old or the new value, never a partial one.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn read_settings(&self, chat_id: i64) -> Result<ChatSettingsRecord, StorageError>;

    async fn write_settings(
        &self,
        chat_id: i64,
        llm_memory: Option<&str>,
    ) -> Result<(), StorageError>;
}

/// SQLite-backed [`SettingsStore`] over the `chat_settings` table.
#[derive(Clone)]
pub struct SqliteSettingsRepository {
    pool_manager: SqlitePoolManager,
}

impl SqliteSettingsRepository {
    /// Opens (or creates) the database at `database_url` and ensures the schema.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    /// Builds a repository on an existing pool and ensures the schema.
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating chat_settings table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_settings (
                chat_id INTEGER PRIMARY KEY,
                llm_memory TEXT,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsRepository {
    async fn read_settings(&self, chat_id: i64) -> Result<ChatSettingsRecord, StorageError> {
        let mut conn = self.pool_manager.pool().acquire().await?;

        let record = sqlx::query_as::<_, ChatSettingsRecord>(
            "SELECT chat_id, llm_memory, updated_at FROM chat_settings WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(record.unwrap_or_else(|| ChatSettingsRecord::empty(chat_id)))
    }

    async fn write_settings(
        &self,
        chat_id: i64,
        llm_memory: Option<&str>,
    ) -> Result<(), StorageError> {
        let mut conn = self.pool_manager.pool().acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO chat_settings (chat_id, llm_memory, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                llm_memory = excluded.llm_memory,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(chat_id)
        .bind(llm_memory)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;

        debug!(
            chat_id = chat_id,
            memory_len = llm_memory.map(|m| m.chars().count()).unwrap_or(0),
            "Chat settings written"
        );
        Ok(())
    }
}
