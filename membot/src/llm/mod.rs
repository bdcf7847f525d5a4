//! # LLM client abstraction
//!
//! Defines the message model, tool declarations, and the [`LlmClient`] trait,
//! plus an OpenAI implementation. Transport-agnostic; used by the agent
//! runner. A reply is either final text or a batch of tool calls the caller
//! must execute and feed back.

use anyhow::Result;
use async_trait::async_trait;

mod openai;

pub use openai::OpenAiLlmClient;

/// Role of a message, one-to-one with Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
    /// A tool result being fed back to the model.
    Tool,
}

/// One tool call requested by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Provider-assigned call id; echoed back with the result.
    pub id: String,
    pub name: String,
    /// Raw JSON argument string as produced by the model.
    pub arguments: String,
}

/// A single chat message, one-to-one with one element of the `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    /// Set on assistant messages that requested tool calls.
    pub tool_calls: Vec<ToolInvocation>,
    /// Set on tool messages; links the result to its call.
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain(MessageRole::Assistant, content)
    }

    /// Assistant turn that requested tool calls (no text content).
    pub fn assistant_tool_calls(tool_calls: Vec<ToolInvocation>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: String::new(),
            tool_calls,
            tool_call_id: None,
        }
    }

    /// Result of one tool call, fed back to the model.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Tool,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    fn plain(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }
}

/// Wire-agnostic declaration of a callable tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments object.
    pub parameters: serde_json::Value,
}

/// Model output for one completion call.
#[derive(Debug, Clone)]
pub enum LlmReply {
    /// Final assistant text.
    Text(String),
    /// The model wants these tools executed before it can answer.
    ToolCalls(Vec<ToolInvocation>),
}

/// LLM client interface: request one completion from messages and available
/// tools. Object-safe so callers can hold `Arc<dyn LlmClient>`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<LlmReply>;
}
