//! Agent tool interface.
//!
//! A tool is one action the model may invoke while composing a reply. Tools
//! report failures through [`ToolError`]; the runner feeds the error text
//! back to the model, so a tool must fail loudly rather than degrade
//! silently (e.g. an over-long memory is rejected, never truncated).

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::core::Chat;
use crate::llm::ToolSpec;
use crate::memory::MEMORY_MAX_CHARS;

/// Per-invocation dependencies: the chat the agent is answering in.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub chat: Chat,
}

/// Errors a tool can report back through the agent's tool-error channel.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// The proposed memory breaks the length invariant. Distinct from
    /// [`ToolError::Failed`] so the model can shorten and retry.
    #[error("Memory exceeds {max} characters limit. Current length is {length} characters. Please provide a shorter memory state.", max = MEMORY_MAX_CHARS)]
    TooLong { length: usize },

    #[error("Tool call failed: {0}")]
    Failed(String),
}

/// One callable action exposed to the model.
#[async_trait]
pub trait AgentTool: Send + Sync {
    fn name(&self) -> &str;

    /// Description shown to the model; should state the calling contract.
    fn description(&self) -> &str;

    /// JSON Schema of the arguments object.
    fn parameters_schema(&self) -> Value;

    /// Executes the tool. The returned string goes into the model's context.
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError>;

    /// Wire-agnostic declaration for the LLM request.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
