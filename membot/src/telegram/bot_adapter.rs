//! Wraps teloxide::Bot and implements [`crate::core::BotApi`]. Production code
//! sends messages via Telegram; tests substitute another BotApi impl.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

use crate::core::{BotApi, BotError, Chat, Result};

/// Thin wrapper around teloxide::Bot that implements core's BotApi trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl BotApi for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
