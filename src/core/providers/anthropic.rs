//! Anthropic messages adapter.
//!
//! Anthropic takes the system prompt as a top-level field and rejects
//! mid-conversation system turns, so the first message is lifted out when
//! it is a system message and any later system message is remapped to
//! assistant. `max_tokens` is mandatory on this API.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::base::post_json;
use super::error::AdapterError;
use super::openai_compat::WireMessage;
use crate::core::types::message::{Message, MessageRole};
use crate::core::types::outputs::ProviderOutput;

pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_base: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_base: ANTHROPIC_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnthropicAdapter {
    config: AnthropicConfig,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Lift a leading system message into the system field and remap the rest.
///
/// Every remaining system turn becomes an assistant turn; Anthropic has no
/// mid-conversation system role.
pub(crate) fn split_system_turn(conversation: &[Message]) -> (Option<&str>, Vec<WireMessage>) {
    let (system, turns) = match conversation.split_first() {
        Some((first, rest)) if first.role == MessageRole::System => {
            (Some(first.content.as_str()), rest)
        }
        _ => (None, conversation),
    };

    let messages = turns
        .iter()
        .map(|m| WireMessage {
            role: match m.role {
                MessageRole::User => "user",
                MessageRole::Assistant | MessageRole::System => "assistant",
            },
            content: m.content.clone(),
        })
        .collect();

    (system, messages)
}

impl AnthropicAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: AnthropicConfig {
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
        debug!(model = llm, "dispatching Anthropic message");
        let (system, messages) = split_system_turn(conversation);
        let request = AnthropicRequest {
            model: llm,
            max_tokens: MAX_OUTPUT_TOKENS,
            system,
            messages,
        };

        let url = format!("{}/messages", self.config.api_base);
        let headers = [
            ("x-api-key", credential.to_string()),
            ("anthropic-version", ANTHROPIC_VERSION.to_string()),
        ];
        let response: AnthropicResponse =
            post_json("Anthropic", &url, &headers, &request).await?;

        match response.content.into_iter().next() {
            Some(block) => Ok(ProviderOutput::ok(block.text)),
            None => Err(AdapterError::MalformedResponse {
                provider: "Anthropic",
                detail: "response carried no content blocks".to_string(),
            }),
        }
    }
}
