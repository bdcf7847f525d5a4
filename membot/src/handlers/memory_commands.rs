//! Memory commands: /settings, /set_memory, /clear_memory.
//!
//! Adapts human commands to the [`ChatMemoryStore`]. Input-shape problems
//! (missing argument) are answered before any store access; store errors are
//! rendered so the user can tell "shorten your text" from "try again later",
//! without leaking internal diagnostics into the chat.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::core::{Handler, HandlerResponse, MemoryError, Message, Result};
use crate::html;
use crate::memory::{ChatMemoryStore, MEMORY_MAX_CHARS};

use super::command::parse_command;

pub struct MemoryCommandHandler {
    store: Arc<ChatMemoryStore>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl MemoryCommandHandler {
    pub fn new(store: Arc<ChatMemoryStore>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            store,
            bot_username,
        }
    }

    async fn show(&self, message: &Message) -> HandlerResponse {
        let memory = match self.store.get(message.chat.id).await {
            Ok(memory) => memory,
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "Failed to read chat settings");
                return HandlerResponse::Reply(
                    "❌ Failed to read settings. Please try again later.".to_string(),
                );
            }
        };

        let rendered = match memory.text {
            Some(text) => html::blockquote(&html::escape(&text)),
            None => "Not set".to_string(),
        };
        HandlerResponse::Reply(format!("📋 Chat settings\n\n🧠 Memory: {}", rendered))
    }

    #[instrument(skip(self, message, args))]
    async fn set(&self, message: &Message, args: &str) -> HandlerResponse {
        let memory_text = args.trim();
        if memory_text.is_empty() {
            // Input-shape check; the store is not touched.
            return HandlerResponse::Reply(format!(
                "Usage: /set_memory {}\nExample: /set_memory This chat is about Rust",
                html::escape("<memory_text>")
            ));
        }

        match self.store.set(message.chat.id, memory_text).await {
            Ok(()) => {
                info!(
                    chat_id = message.chat.id,
                    memory_len = memory_text.chars().count(),
                    "Memory set via command"
                );
                HandlerResponse::Reply(format!(
                    "✅ Memory updated:\n\n{}",
                    html::escape(memory_text)
                ))
            }
            Err(MemoryError::TooLong { length }) => HandlerResponse::Reply(format!(
                "❌ Memory text cannot exceed {} characters. Current length is {} characters.",
                MEMORY_MAX_CHARS, length
            )),
            Err(MemoryError::Storage(e)) => {
                error!(error = %e, chat_id = message.chat.id, "Failed to update memory");
                HandlerResponse::Reply(
                    "❌ Failed to update memory. Please try again later.".to_string(),
                )
            }
        }
    }

    #[instrument(skip(self, message))]
    async fn clear(&self, message: &Message) -> HandlerResponse {
        match self.store.clear(message.chat.id).await {
            Ok(()) => {
                info!(chat_id = message.chat.id, "Memory cleared via command");
                HandlerResponse::Reply("✅ Memory cleared.".to_string())
            }
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "Failed to clear memory");
                HandlerResponse::Reply(
                    "❌ Failed to clear memory. Please try again later.".to_string(),
                )
            }
        }
    }
}

#[async_trait]
impl Handler for MemoryCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await;
        let Some(cmd) = parse_command(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        let response = match cmd.name.as_str() {
            "settings" => self.show(message).await,
            "set_memory" => self.set(message, cmd.args).await,
            "clear_memory" => self.clear(message).await,
            _ => HandlerResponse::Continue,
        };
        Ok(response)
    }
}
