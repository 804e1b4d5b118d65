//! Cohere chat adapter.
//!
//! Cohere's chat API takes the latest message as a standalone argument and
//! everything before it as chat history with its own role vocabulary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::base::{bearer, post_json};
use super::error::AdapterError;
use crate::core::types::message::{Message, MessageRole};
use crate::core::types::outputs::ProviderOutput;

pub const COHERE_API_BASE: &str = "https://api.cohere.ai/v1";

#[derive(Debug, Clone)]
pub struct CohereConfig {
    pub api_base: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_base: COHERE_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CohereAdapter {
    config: CohereConfig,
}

#[derive(Debug, Serialize)]
struct CohereChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    chat_history: Vec<CohereHistoryTurn<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CohereHistoryTurn<'a> {
    pub role: &'static str,
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    text: String,
}

fn history_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "USER",
        MessageRole::System => "SYSTEM",
        MessageRole::Assistant => "CHATBOT",
    }
}

/// The last message becomes the standalone argument; all preceding messages
/// become history with remapped roles.
pub(crate) fn split_history(
    conversation: &[Message],
) -> Result<(&str, Vec<CohereHistoryTurn<'_>>), AdapterError> {
    let (last, history) = conversation
        .split_last()
        .ok_or(AdapterError::EmptyConversation)?;

    let turns = history
        .iter()
        .map(|m| CohereHistoryTurn {
            role: history_role(m.role),
            message: m.content.as_str(),
        })
        .collect();

    Ok((last.content.as_str(), turns))
}

impl CohereAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: CohereConfig {
                api_base: api_base.into(),
            },
        }
    }

    pub async fn run(
        &self,
        llm: &str,
        conversation: &[Message],
        credential: &str,
    ) -> Result<ProviderOutput, AdapterError> {
        debug!(model = llm, "dispatching Cohere chat");
        let (message, chat_history) = split_history(conversation)?;
        let request = CohereChatRequest {
            model: llm,
            message,
            chat_history,
        };

        let url = format!("{}/chat", self.config.api_base);
        let response: CohereChatResponse =
            post_json("Cohere", &url, &[bearer(credential)], &request).await?;
        Ok(ProviderOutput::ok(response.text))
    }
}
