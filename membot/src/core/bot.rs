//! Bot transport trait: the narrow surface handlers and tools send through.
//!
//! Production code talks to Telegram via [`crate::telegram::TelegramBotAdapter`];
//! tests substitute a recording implementation.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message};

/// Outbound message surface. `*_html` methods send with HTML parse mode; the
/// caller is responsible for escaping user text (see [`crate::html`]).
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Sends plain text to the chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends HTML-formatted text to the chat.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;

    /// Replies (HTML) to the chat a message came from.
    async fn reply_html(&self, message: &Message, html: &str) -> Result<()> {
        self.send_html(&message.chat, html).await
    }
}
