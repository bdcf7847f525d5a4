//! Logged update record.
//!
//! Maps to the `update_log` table. Every handled message (incoming or
//! outgoing) becomes one row; the AI handler reads the most recent rows of a
//! chat back as conversation context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a logged update, stored as its lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDirection {
    Incoming,
    Outgoing,
}

impl UpdateDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateDirection::Incoming => "incoming",
            UpdateDirection::Outgoing => "outgoing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UpdateRecord {
    pub id: String,
    pub chat_id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub direction: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl UpdateRecord {
    /// Creates a record with a generated UUID and the current timestamp.
    pub fn new(
        chat_id: i64,
        user_id: i64,
        username: Option<String>,
        direction: UpdateDirection,
        content: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id,
            user_id,
            username,
            direction: direction.as_str().to_string(),
            content,
            created_at: Utc::now(),
        }
    }
}
