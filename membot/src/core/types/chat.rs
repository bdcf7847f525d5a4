//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (group, channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// True for one-on-one chats with the bot.
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }
}
