//! Component factory: builds BotComponents from config. Isolates assembly
//! logic from the runner.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::agent::{AgentRunner, UpdateChatMemoryTool};
use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::BotApi;
use crate::handlers::{
    AiResponseHandler, BasicCommandHandler, MemoryCommandHandler, UpdateLogHandler,
};
use crate::llm::{LlmClient, OpenAiLlmClient};
use crate::memory::ChatMemoryStore;
use crate::telegram::TelegramBotAdapter;
use storage::{SqlitePoolManager, SqliteSettingsRepository, UpdateLogRepository};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub memory_store: Arc<ChatMemoryStore>,
    pub update_log: UpdateLogRepository,
    pub teloxide_bot: Bot,
    pub bot_api: Arc<dyn BotApi>,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub llm_client: Arc<dyn LlmClient>,
}

/// Builds BotComponents: one SQLite pool shared by both repositories, the
/// teloxide bot (optionally pointed at a custom API URL), and the LLM client.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let pool_manager = SqlitePoolManager::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url,
                "Failed to open SQLite database"
            );
            anyhow::anyhow!("Failed to open SQLite database: {}", e)
        })?;

    let settings_repo = Arc::new(SqliteSettingsRepository::with_pool(pool_manager.clone()).await?);
    let update_log = UpdateLogRepository::with_pool(pool_manager).await?;
    let memory_store = Arc::new(ChatMemoryStore::new(settings_repo));

    let teloxide_bot = {
        let bot = Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot_api: Arc<dyn BotApi> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));

    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiLlmClient::with_base_url(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.ai_model.clone(),
    ));

    info!(
        database_url = %config.database_url,
        ai_model = %config.ai_model,
        "Bot components initialized"
    );

    Ok(BotComponents {
        memory_store,
        update_log,
        teloxide_bot,
        bot_api,
        bot_username,
        llm_client,
    })
}

/// Builds the handler chain: update log → basic commands → memory commands → AI.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    let update_memory_tool = Arc::new(UpdateChatMemoryTool::new(
        components.memory_store.clone(),
        components.bot_api.clone(),
    ));
    let runner = AgentRunner::new(components.llm_client.clone(), vec![update_memory_tool])
        .with_max_steps(config.ai_max_steps);

    HandlerChain::new()
        .add_handler(Arc::new(UpdateLogHandler::new(
            components.update_log.clone(),
        )))
        .add_handler(Arc::new(BasicCommandHandler::new(
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(MemoryCommandHandler::new(
            components.memory_store.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(AiResponseHandler::new(
            runner,
            components.memory_store.clone(),
            components.update_log.clone(),
            components.bot_username.clone(),
            config.trigger_words.clone(),
            config.ai_context_messages,
        )))
}
