//! Update log repository: persistence and queries for handled updates.
//!
//! Every incoming message and outgoing reply is appended here; the AI
//! handler reads the latest rows of a chat back as conversation context.

use tracing::debug;

use crate::error::StorageError;
use crate::models::UpdateRecord;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct UpdateLogRepository {
    pool_manager: SqlitePoolManager,
}

impl UpdateLogRepository {
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
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS update_log (
                id TEXT PRIMARY KEY,
                chat_id INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                username TEXT,
                direction TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_update_log_chat_id ON update_log(chat_id)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Appends one record to the log.
    pub async fn insert(&self, record: &UpdateRecord) -> Result<(), StorageError> {
        let mut conn = self.pool_manager.pool().acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO update_log (id, chat_id, user_id, username, direction, content, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(record.chat_id)
        .bind(record.user_id)
        .bind(&record.username)
        .bind(&record.direction)
        .bind(&record.content)
        .bind(record.created_at)
        .execute(&mut *conn)
        .await?;

        debug!(chat_id = record.chat_id, id = %record.id, "Update logged");
        Ok(())
    }

    /// Returns up to `limit` most recent records for a chat, newest first.
    pub async fn recent_by_chat(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<UpdateRecord>, StorageError> {
        let mut conn = self.pool_manager.pool().acquire().await?;

        let records = sqlx::query_as::<_, UpdateRecord>(
            r#"
            SELECT id, chat_id, user_id, username, direction, content, created_at
            FROM update_log
            WHERE chat_id = ?
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }
}
