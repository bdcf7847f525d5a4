//! Agent capability layer: the tool interface, the tools the model may call,
//! and the runner that executes the tool loop.

mod runner;
mod tool;
mod update_memory;

pub use runner::AgentRunner;
pub use tool::{AgentTool, ToolContext, ToolError};
pub use update_memory::UpdateChatMemoryTool;
