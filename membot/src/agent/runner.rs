//! Agent runner: bounded tool-call loop around an [`LlmClient`].

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::core::{BotError, Result};
use crate::llm::{ChatMessage, LlmClient, LlmReply, ToolInvocation, ToolSpec};

use super::tool::{AgentTool, ToolContext, ToolError};

/// Upper bound on model round-trips per reply; keeps a confused model from
/// looping on tool calls forever.
const DEFAULT_MAX_STEPS: usize = 4;

/// Drives one conversation turn: call the model, execute requested tools,
/// feed results (and tool errors) back, repeat until the model answers with
/// text or the step budget runs out.
pub struct AgentRunner {
    client: Arc<dyn LlmClient>,
    tools: Vec<Arc<dyn AgentTool>>,
    max_steps: usize,
}

impl AgentRunner {
    pub fn new(client: Arc<dyn LlmClient>, tools: Vec<Arc<dyn AgentTool>>) -> Self {
        Self {
            client,
            tools,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Runs the loop and returns the model's final text reply.
    #[instrument(skip(self, ctx, messages))]
    pub async fn run(&self, ctx: &ToolContext, mut messages: Vec<ChatMessage>) -> Result<String> {
        let specs: Vec<ToolSpec> = self.tools.iter().map(|t| t.spec()).collect();

        for step in 0..self.max_steps {
            let reply = self
                .client
                .complete(&messages, &specs)
                .await
                .map_err(|e| BotError::Llm(e.to_string()))?;

            match reply {
                LlmReply::Text(text) => return Ok(text),
                LlmReply::ToolCalls(calls) => {
                    info!(
                        chat_id = ctx.chat.id,
                        step = step,
                        call_count = calls.len(),
                        "Model requested tool calls"
                    );
                    messages.push(ChatMessage::assistant_tool_calls(calls.clone()));
                    for call in calls {
                        let content = match self.dispatch(ctx, &call).await {
                            Ok(output) => output,
                            Err(e) => {
                                // The model reads this and can correct itself
                                // (e.g. shorten an over-long memory).
                                warn!(
                                    chat_id = ctx.chat.id,
                                    tool = %call.name,
                                    error = %e,
                                    "Tool call failed"
                                );
                                format!("Tool error: {}", e)
                            }
                        };
                        messages.push(ChatMessage::tool_result(call.id, content));
                    }
                }
            }
        }

        Err(BotError::Llm(format!(
            "No final reply after {} agent steps",
            self.max_steps
        )))
    }

    async fn dispatch(&self, ctx: &ToolContext, call: &ToolInvocation) -> std::result::Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == call.name)
            .ok_or_else(|| ToolError::Failed(format!("Unknown tool: {}", call.name)))?;

        let args: serde_json::Value = serde_json::from_str(&call.arguments)
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        tool.call(ctx, args).await
    }
}
