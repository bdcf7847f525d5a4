//! # membot
//!
//! AI-powered Telegram bot with a bounded per-chat memory note. Wires the
//! handler chain (update log, commands, AI responses), the per-chat memory
//! store, the agent tool loop, and the SQLite-backed storage crate. Loads
//! config from env and runs the teloxide REPL.

pub mod agent;
pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod html;
pub mod llm;
pub mod memory;
pub mod mention;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, BotApi, BotError, Chat, Handler, HandlerResponse, MemoryError, Message,
    MessageDirection, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use agent::{AgentRunner, AgentTool, ToolContext, ToolError, UpdateChatMemoryTool};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use handlers::{
    parse_command, AiResponseHandler, BasicCommandHandler, MemoryCommandHandler, UpdateLogHandler,
};
pub use llm::{ChatMessage, LlmClient, LlmReply, MessageRole, OpenAiLlmClient, ToolInvocation, ToolSpec};
pub use memory::{validate, ChatMemory, ChatMemoryStore, MEMORY_MAX_CHARS};
pub use runner::run_bot;
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
