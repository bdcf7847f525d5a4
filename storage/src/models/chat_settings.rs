//! Per-chat settings record.
//!
//! Maps to the `chat_settings` table. One row per chat; `llm_memory` is the
//! chat's free-text memory note (NULL when not set).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatSettingsRecord {
    pub chat_id: i64,
    pub llm_memory: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSettingsRecord {
    /// Default record for a chat that has no row yet.
    pub fn empty(chat_id: i64) -> Self {
        Self {
            chat_id,
            llm_memory: None,
            updated_at: Utc::now(),
        }
    }
}
