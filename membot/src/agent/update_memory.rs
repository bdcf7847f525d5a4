//! The `update_chat_memory` tool.
//!
//! Lets the agent replace a chat's entire memory note. The agent is expected
//! to merge old memory with new facts itself before calling; the store does
//! not merge. On success the originating chat gets a visible confirmation
//! message, so memory changes are never silent.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::core::{BotApi, MemoryError};
use crate::html;
use crate::memory::ChatMemoryStore;

use super::tool::{AgentTool, ToolContext, ToolError};

#[derive(Debug, Deserialize)]
struct UpdateMemoryInput {
    full_memory: String,
}

pub struct UpdateChatMemoryTool {
    store: Arc<ChatMemoryStore>,
    bot: Arc<dyn BotApi>,
}

impl UpdateChatMemoryTool {
    pub fn new(store: Arc<ChatMemoryStore>, bot: Arc<dyn BotApi>) -> Self {
        Self { store, bot }
    }
}

#[async_trait]
impl AgentTool for UpdateChatMemoryTool {
    fn name(&self) -> &str {
        "update_chat_memory"
    }

    fn description(&self) -> &str {
        "Use this to save the entire memory state after combining existing memory with new facts. \
         The memory has a 1024 character limit. \
         Keep it concise and remove less important information if the limit would be exceeded."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "full_memory": {
                    "type": "string",
                    "description": "The complete new memory state for this chat"
                }
            },
            "required": ["full_memory"]
        })
    }

    #[instrument(skip(self, args))]
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: UpdateMemoryInput = serde_json::from_value(args)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        let full_memory = input.full_memory.trim();

        match self.store.set(ctx.chat.id, full_memory).await {
            Ok(()) => {}
            Err(MemoryError::TooLong { length }) => return Err(ToolError::TooLong { length }),
            Err(MemoryError::Storage(e)) => return Err(ToolError::Failed(e.to_string())),
        }

        let new_length = full_memory.chars().count();
        info!(
            chat_id = ctx.chat.id,
            memory_len = new_length,
            "Agent updated chat memory"
        );

        // Visible side effect: the chat sees what the agent now remembers.
        let notice = format!(
            "(System message) Memory updated:\n{}",
            html::expandable_blockquote(&html::escape(full_memory))
        );
        if let Err(e) = self.bot.send_html(&ctx.chat, &notice).await {
            warn!(error = %e, chat_id = ctx.chat.id, "Failed to send memory update notice");
        }

        Ok(format!(
            "Memory updated successfully. New memory length: {} characters.",
            new_length
        ))
    }
}
