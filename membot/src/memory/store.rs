//! Per-chat memory store.
//!
//! [`ChatMemoryStore`] is the sole writer of durable memory state: every
//! mutation runs the length validator and serializes with other writers on
//! the same chat. Handlers and tools never touch [`SettingsStore`] directly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, instrument};

use crate::core::MemoryError;
use crate::memory::validator;
use storage::SettingsStore;

/// The current memory note of one chat. `text: None` means "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMemory {
    pub chat_id: i64,
    pub text: Option<String>,
}

/// Durable owner of chat memory records.
///
/// Writes on the same `chat_id` are mutually exclusive (validate + persist as
/// one unit); writes on different chats run in parallel. The lock registry is
/// only held long enough to clone a per-chat lock handle, never across an
/// await point, so a slow write in one chat cannot stall another chat.
pub struct ChatMemoryStore {
    settings: Arc<dyn SettingsStore>,
    chat_locks: StdMutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl ChatMemoryStore {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            settings,
            chat_locks: StdMutex::new(HashMap::new()),
        }
    }

    fn chat_lock(&self, chat_id: i64) -> Arc<AsyncMutex<()>> {
        let mut locks = self.chat_locks.lock().expect("chat lock registry poisoned");
        locks
            .entry(chat_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Returns the chat's current memory. An absent or empty stored value is
    /// reported as `text: None`, never as an error.
    pub async fn get(&self, chat_id: i64) -> Result<ChatMemory, MemoryError> {
        let record = self.settings.read_settings(chat_id).await?;
        let text = record.llm_memory.filter(|t| !t.is_empty());
        Ok(ChatMemory { chat_id, text })
    }

    /// Replaces the chat's memory with `text`.
    ///
    /// Validation failures leave storage untouched. An empty string is stored
    /// as "not set" (there is no distinct tombstone state).
    #[instrument(skip(self, text))]
    pub async fn set(&self, chat_id: i64, text: &str) -> Result<(), MemoryError> {
        validator::validate(Some(text))?;

        let value = if text.is_empty() { None } else { Some(text) };

        let lock = self.chat_lock(chat_id);
        let _guard = lock.lock().await;
        self.settings.write_settings(chat_id, value).await?;

        debug!(
            chat_id = chat_id,
            memory_len = text.chars().count(),
            "Chat memory set"
        );
        Ok(())
    }

    /// Clears the chat's memory. Clearing can never violate the length
    /// invariant, so this only fails when storage does.
    #[instrument(skip(self))]
    pub async fn clear(&self, chat_id: i64) -> Result<(), MemoryError> {
        let lock = self.chat_lock(chat_id);
        let _guard = lock.lock().await;
        self.settings.write_settings(chat_id, None).await?;

        debug!(chat_id = chat_id, "Chat memory cleared");
        Ok(())
    }
}
