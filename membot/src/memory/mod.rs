//! Chat memory: length validation and the per-chat memory store.

mod store;
mod validator;

pub use store::{ChatMemory, ChatMemoryStore};
pub use validator::{validate, MEMORY_MAX_CHARS};
