//! Perplexity chat adapter.
//!
//! Vendor guidance for the sonar online models disallows system prompts and
//! multi-turn framing, so the whole conversation is collapsed into a single
//! user turn.

use tracing::debug;

use super::error::AdapterError;
use super::openai_compat::{ChatCompletionRequest, WireMessage, run_chat};
use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

pub const PERPLEXITY_API_BASE: &str = "https://api.perplexity.ai";

#[derive(Debug, Clone)]
pub struct PerplexityConfig {
    pub api_base: String,
}

impl Default for PerplexityConfig {
    fn default() -> Self {
        Self {
            api_base: PERPLEXITY_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PerplexityAdapter {
    config: PerplexityConfig,
}

/// Newline-join every message's content in original order.
pub(crate) fn collapse_conversation(conversation: &[Message]) -> String {
    conversation
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl PerplexityAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: PerplexityConfig {
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
        debug!(model = llm, "dispatching Perplexity chat completion");
        let request = ChatCompletionRequest {
            model: llm,
            messages: vec![WireMessage {
                role: "user",
                content: collapse_conversation(conversation),
            }],
            max_tokens: None,
        };
        run_chat("Perplexity", &self.config.api_base, &request, credential).await
    }
}
