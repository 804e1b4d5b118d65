//! OpenAI chat adapter.

use tracing::debug;

use super::error::AdapterError;
use super::openai_compat::{ChatCompletionRequest, passthrough_messages, run_chat};
use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: OPENAI_API_BASE.to_string(),
        }
    }
}

/// Passes the conversation through unchanged; no max-token ceiling.
#[derive(Debug, Clone, Default)]
pub struct OpenAiAdapter {
    config: OpenAiConfig,
}

impl OpenAiAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: OpenAiConfig {
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
        debug!(model = llm, "dispatching OpenAI chat completion");
        let request = ChatCompletionRequest {
            model: llm,
            messages: passthrough_messages(conversation),
            max_tokens: None,
        };
        run_chat("OpenAI", &self.config.api_base, &request, credential).await
    }
}
