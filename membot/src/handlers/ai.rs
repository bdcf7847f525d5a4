//! AI response handler.
//!
//! Replies when the message is addressed to the bot: /ask, a trigger-word
//! mention, a reply to one of the bot's messages, or any text in a private
//! chat. Builds the model context from the chat's memory note and the recent
//! update log, then runs the agent tool loop.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::agent::{AgentRunner, ToolContext};
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::html;
use crate::llm::ChatMessage;
use crate::memory::ChatMemoryStore;
use crate::mention;
use storage::UpdateLogRepository;

use super::command::parse_command;

const SYSTEM_PROMPT: &str = "You are a helpful, conversational assistant in Telegram. \
Reply in the user's message language. \
Be concise, friendly, and clear; keep responses under 200 words unless more detail is requested. \
Personalize replies using the chat context when needed. \
If users are ironic or joking, you can be a bit sarcastic in response; don't get offended. \
Don't finish your response with follow-up questions.";

const FALLBACK_REPLY: &str = "😅 Something went wrong. I couldn't process that message.";

pub struct AiResponseHandler {
    runner: AgentRunner,
    memory: Arc<ChatMemoryStore>,
    updates: UpdateLogRepository,
    bot_username: Arc<RwLock<Option<String>>>,
    trigger_words: Vec<String>,
    context_messages: i64,
}

impl AiResponseHandler {
    pub fn new(
        runner: AgentRunner,
        memory: Arc<ChatMemoryStore>,
        updates: UpdateLogRepository,
        bot_username: Arc<RwLock<Option<String>>>,
        trigger_words: Vec<String>,
        context_messages: i64,
    ) -> Self {
        Self {
            runner,
            memory,
            updates,
            bot_username,
            trigger_words,
            context_messages,
        }
    }

    /// Builds the model input: system prompt, memory note, recent history,
    /// and the current message. Context sources degrade to empty on storage
    /// trouble instead of failing the reply.
    async fn build_messages(&self, message: &Message, question: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT)];

        match self.memory.get(message.chat.id).await {
            Ok(memory) => {
                if let Some(text) = memory.text {
                    messages.push(ChatMessage::system(format!(
                        "Long-term memory for this chat:\n{}",
                        text
                    )));
                }
            }
            Err(e) => {
                warn!(error = %e, chat_id = message.chat.id, "Failed to read chat memory for context");
            }
        }

        let mut context = String::new();
        match self
            .updates
            .recent_by_chat(message.chat.id, self.context_messages)
            .await
        {
            Ok(records) if !records.is_empty() => {
                context.push_str("--- Recent chat history ---\n");
                // Newest-first from storage; the model reads oldest-first.
                for record in records.iter().rev() {
                    let name = match record.direction.as_str() {
                        "outgoing" => "you".to_string(),
                        _ => record
                            .username
                            .clone()
                            .unwrap_or_else(|| record.user_id.to_string()),
                    };
                    context.push_str(&format!("{}: {}\n", name, record.content));
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, chat_id = message.chat.id, "Failed to read update log for context");
            }
        }
        context.push_str("--- Current message ---\n");
        context.push_str(&format!("{}: {}", message.user.display_name(), question));

        messages.push(ChatMessage::user(context));
        messages
    }
}

#[async_trait]
impl Handler for AiResponseHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let content = message.content.trim();
        if content.is_empty() {
            return Ok(HandlerResponse::Continue);
        }

        let username = self.bot_username.read().await;
        let command = parse_command(content, username.as_deref());
        drop(username);

        let is_ask = command.as_ref().map(|c| c.name == "ask").unwrap_or(false);
        if command.is_some() && !is_ask {
            // Some other command; not ours to answer.
            return Ok(HandlerResponse::Continue);
        }

        let is_reply_to_bot =
            message.reply_to_message_id.is_some() && message.reply_to_message_from_bot;
        let triggered = is_ask
            || message.chat.is_private()
            || is_reply_to_bot
            || mention::is_trigger_mentioned(content, &self.trigger_words);
        if !triggered {
            return Ok(HandlerResponse::Continue);
        }

        let question = match command {
            Some(cmd) if !cmd.args.is_empty() => cmd.args.to_string(),
            _ => content.to_string(),
        };

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "AI handler triggered"
        );

        let messages = self.build_messages(message, &question).await;
        let ctx = ToolContext {
            chat: message.chat.clone(),
        };

        match self.runner.run(&ctx, messages).await {
            Ok(reply) => Ok(HandlerResponse::Reply(html::escape(&reply))),
            Err(e) => {
                error!(error = %e, chat_id = message.chat.id, "AI response failed");
                Ok(HandlerResponse::Reply(FALLBACK_REPLY.to_string()))
            }
        }
    }
}
