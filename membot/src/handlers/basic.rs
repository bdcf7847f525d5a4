//! Basic commands: /start and /help.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::html;

use super::command::parse_command;

/// Replies to /start with a greeting and to /help with a one-line description.
pub struct BasicCommandHandler {
    bot_username: Arc<RwLock<Option<String>>>,
}

impl BasicCommandHandler {
    pub fn new(bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self { bot_username }
    }
}

#[async_trait]
impl Handler for BasicCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await;
        let Some(cmd) = parse_command(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };

        match cmd.name.as_str() {
            "start" => Ok(HandlerResponse::Reply(format!(
                "Hello, {}!",
                html::escape(&message.user.full_name())
            ))),
            "help" => Ok(HandlerResponse::Reply(
                "I'm a friendly AI-powered Telegram bot. Mention me or use /ask to talk, \
                 /settings to see what I remember about this chat."
                    .to_string(),
            )),
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
