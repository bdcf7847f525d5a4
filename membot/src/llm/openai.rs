//! OpenAI implementation of [`LlmClient`] over [async-openai].
//!
//! Maps the wire-agnostic message/tool model to Chat Completions types in
//! both directions. Holds the API key only for masked logging.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionTool, ChatCompletionToolArgs, ChatCompletionToolType,
        CreateChatCompletionRequestArgs, FunctionCall, FunctionObjectArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, info};

use super::{ChatMessage, LlmClient, LlmReply, MessageRole, ToolInvocation, ToolSpec};

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Chat Completions client with tool-call support.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    api_key_for_logging: String,
}

impl OpenAiLlmClient {
    /// Builds a client for the default API base URL.
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
            api_key_for_logging: api_key,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    async fn complete(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<LlmReply> {
        debug!(
            model = %self.model,
            api_key = %mask_token(&self.api_key_for_logging),
            message_count = messages.len(),
            tool_count = tools.len(),
            "Requesting chat completion"
        );

        let mut request = CreateChatCompletionRequestArgs::default();
        request
            .model(&self.model)
            .messages(to_openai_messages(messages)?);
        if !tools.is_empty() {
            request.tools(to_openai_tools(tools)?);
        }
        let request = request.build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(usage) = &response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Chat completion returned no choices"))?;

        if let Some(calls) = choice.message.tool_calls {
            if !calls.is_empty() {
                let invocations = calls
                    .into_iter()
                    .map(|c| ToolInvocation {
                        id: c.id,
                        name: c.function.name,
                        arguments: c.function.arguments,
                    })
                    .collect();
                return Ok(LlmReply::ToolCalls(invocations));
            }
        }

        Ok(LlmReply::Text(choice.message.content.unwrap_or_default()))
    }
}

/// Converts wire-agnostic messages into Chat Completions request messages.
fn to_openai_messages(messages: &[ChatMessage]) -> Result<Vec<ChatCompletionRequestMessage>> {
    let mut out = Vec::with_capacity(messages.len());
    for msg in messages {
        let openai_msg: ChatCompletionRequestMessage = match msg.role {
            MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.clone())
                .build()?
                .into(),
            MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.clone())
                .build()?
                .into(),
            MessageRole::Assistant => {
                let mut builder = ChatCompletionRequestAssistantMessageArgs::default();
                if msg.tool_calls.is_empty() {
                    builder.content(msg.content.clone());
                } else {
                    builder.tool_calls(
                        msg.tool_calls
                            .iter()
                            .map(|c| ChatCompletionMessageToolCall {
                                id: c.id.clone(),
                                r#type: ChatCompletionToolType::Function,
                                function: FunctionCall {
                                    name: c.name.clone(),
                                    arguments: c.arguments.clone(),
                                },
                            })
                            .collect::<Vec<_>>(),
                    );
                }
                builder.build()?.into()
            }
            MessageRole::Tool => ChatCompletionRequestToolMessageArgs::default()
                .content(msg.content.clone())
                .tool_call_id(msg.tool_call_id.clone().unwrap_or_default())
                .build()?
                .into(),
        };
        out.push(openai_msg);
    }
    Ok(out)
}

/// Converts tool declarations into Chat Completions function tools.
fn to_openai_tools(tools: &[ToolSpec]) -> Result<Vec<ChatCompletionTool>> {
    tools
        .iter()
        .map(|t| {
            let function = FunctionObjectArgs::default()
                .name(t.name.clone())
                .description(t.description.clone())
                .parameters(t.parameters.clone())
                .build()?;
            Ok(ChatCompletionToolArgs::default()
                .r#type(ChatCompletionToolType::Function)
                .function(function)
                .build()?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_long() {
        assert_eq!(mask_token("sk-abcd1234efgh5678"), "sk-abcd***5678");
    }

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_to_openai_messages_roles() {
        let messages = vec![
            ChatMessage::system("sys"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
            ChatMessage::tool_result("call_1", "done"),
        ];
        let converted = to_openai_messages(&messages).expect("conversion");
        assert_eq!(converted.len(), 4);
    }

    #[test]
    fn test_to_openai_tools_carries_schema() {
        let tools = vec![ToolSpec {
            name: "update_chat_memory".to_string(),
            description: "desc".to_string(),
            parameters: serde_json::json!({"type": "object"}),
        }];
        let converted = to_openai_tools(&tools).expect("conversion");
        assert_eq!(converted.len(), 1);
    }
}
