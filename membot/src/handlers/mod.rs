//! Handler implementations: update log, basic commands, memory commands, AI responses.

mod ai;
mod basic;
mod command;
mod memory_commands;
mod update_log;

pub use ai::AiResponseHandler;
pub use basic::BasicCommandHandler;
pub use command::{parse_command, ParsedCommand};
pub use memory_commands::MemoryCommandHandler;
pub use update_log::UpdateLogHandler;
