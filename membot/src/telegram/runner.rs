//! REPL runner: converts teloxide messages to core::Message and passes them to
//! the HandlerChain, then delivers the chain's reply. Calls get_me before
//! starting to populate the bot_username cache used by command parsing.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::core::{BotApi, HandlerResponse, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot, handler chain, outbound API
/// and bot_username cache. Each message is converted to a core Message and
/// handled in a spawned task so slow handlers never block the update loop.
#[instrument(skip(bot, handler_chain, bot_api, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_api: Arc<dyn BotApi>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> anyhow::Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            *bot_username.write().await = Some(username.clone());
            info!(username = %username, "Bot username cached before repl");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let bot_api = bot_api.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                has_text = msg.text().is_some(),
                "Received message"
            );

            tokio::spawn(async move {
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = bot_api.reply_html(&core_msg, &text).await {
                            error!(error = %e, chat_id = core_msg.chat.id, "Failed to send reply");
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
