//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error for transport and LLM failures;
//! [`MemoryError`] is the result type of chat-memory operations and keeps
//! the user-actionable `TooLong` case distinct from storage outages.

use thiserror::Error;

use crate::memory::MEMORY_MAX_CHARS;
use storage::StorageError;

/// Top-level error for the bot (transport, LLM).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot transport error: {0}")]
    Bot(String),

    #[error("LLM error: {0}")]
    Llm(String),
}

/// Errors from chat-memory operations.
///
/// `TooLong` means the caller's input broke the length invariant and storage
/// was left untouched; `Storage` means the persistence collaborator failed.
/// Callers must render these differently (edit your input vs. try later).
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Memory exceeds {max} characters limit. Current length is {length} characters.", max = MEMORY_MAX_CHARS)]
    TooLong { length: usize },

    #[error("Storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
