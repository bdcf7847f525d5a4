//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    /// SQLite database file path (chat settings and update log).
    pub database_url: String,
    pub log_file: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    /// Upper bound on model round-trips (tool loop) per reply.
    pub ai_max_steps: usize,
    /// How many logged updates to feed back as conversation context.
    pub ai_context_messages: i64,
    /// Words that address the bot in group chats, checked case-insensitively.
    pub trigger_words: Vec<String>,
    /// Optional Telegram Bot API base URL (e.g. a mock server in tests).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads configuration from environment variables. A token passed on the
    /// command line overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "./membot.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/membot.log".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let ai_max_steps = env::var("AI_MAX_STEPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4);
        let ai_context_messages = env::var("AI_CONTEXT_MESSAGES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let trigger_words = env::var("AI_TRIGGER_WORDS")
            .unwrap_or_else(|_| "membot".to_string())
            .split(',')
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            database_url,
            log_file,
            openai_api_key,
            openai_base_url,
            ai_model,
            ai_max_steps,
            ai_context_messages,
            trigger_words,
            telegram_api_url,
        })
    }
}
