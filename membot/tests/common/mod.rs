//! Shared test doubles: recording settings store, bot, and LLM client.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use membot::{BotApi, Chat, ChatMessage, LlmClient, LlmReply, Result as CoreResult, ToolSpec};
use storage::{ChatSettingsRecord, SettingsStore, StorageError};

/// In-memory [`SettingsStore`] with call counters and a controllable failure
/// switch. Writes yield to the scheduler mid-flight and track how many
/// writers overlap on the same chat, so tests can verify the store's
/// per-chat serialization guarantee.
#[derive(Default)]
pub struct MockSettingsStore {
    data: Mutex<HashMap<i64, Option<String>>>,
    read_calls: AtomicUsize,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    active_writers: Mutex<HashMap<i64, usize>>,
    max_overlap: AtomicUsize,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_call_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn write_call_count(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Maximum number of writers ever active on one chat at the same time.
    pub fn max_writer_overlap(&self) -> usize {
        self.max_overlap.load(Ordering::SeqCst)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self, chat_id: i64) -> Option<String> {
        self.data
            .lock()
            .expect("data lock")
            .get(&chat_id)
            .cloned()
            .flatten()
    }

    fn enter_write(&self, chat_id: i64) {
        let mut active = self.active_writers.lock().expect("active lock");
        let count = active.entry(chat_id).or_insert(0);
        *count += 1;
        self.max_overlap.fetch_max(*count, Ordering::SeqCst);
    }

    fn leave_write(&self, chat_id: i64) {
        let mut active = self.active_writers.lock().expect("active lock");
        if let Some(count) = active.get_mut(&chat_id) {
            *count -= 1;
        }
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn read_settings(&self, chat_id: i64) -> std::result::Result<ChatSettingsRecord, StorageError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Database("mock read failure".to_string()));
        }
        let llm_memory = self
            .data
            .lock()
            .expect("data lock")
            .get(&chat_id)
            .cloned()
            .flatten();
        let mut record = ChatSettingsRecord::empty(chat_id);
        record.llm_memory = llm_memory;
        Ok(record)
    }

    async fn write_settings(
        &self,
        chat_id: i64,
        llm_memory: Option<&str>,
    ) -> std::result::Result<(), StorageError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Database("mock write failure".to_string()));
        }

        self.enter_write(chat_id);
        // Widen the race window: a non-serialized caller would overlap here.
        tokio::task::yield_now().await;
        self.data
            .lock()
            .expect("data lock")
            .insert(chat_id, llm_memory.map(str::to_string));
        tokio::task::yield_now().await;
        self.leave_write(chat_id);
        Ok(())
    }
}

/// [`BotApi`] double that records every outbound message.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[async_trait]
impl BotApi for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> CoreResult<()> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((chat.id, text.to_string()));
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> CoreResult<()> {
        self.send_message(chat, html).await
    }
}

/// [`LlmClient`] double that plays back scripted replies and captures the
/// request messages of every call.
#[derive(Default)]
pub struct MockLlmClient {
    replies: Mutex<VecDeque<LlmReply>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlmClient {
    pub fn new(replies: Vec<LlmReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _tools: &[ToolSpec],
    ) -> anyhow::Result<LlmReply> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(messages.to_vec());
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("MockLlmClient ran out of scripted replies"))
    }
}

/// Core message fixture for handler tests.
pub fn message_in(chat_id: i64, chat_type: &str, content: &str) -> membot::Message {
    membot::Message {
        id: "1".to_string(),
        user: membot::User {
            id: 123,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: membot::Chat {
            id: chat_id,
            chat_type: chat_type.to_string(),
        },
        content: content.to_string(),
        direction: membot::MessageDirection::Incoming,
        created_at: chrono::Utc::now(),
        reply_to_message_id: None,
        reply_to_message_from_bot: false,
    }
}
