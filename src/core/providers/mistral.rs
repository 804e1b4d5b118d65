//! Mistral chat adapter.

use tracing::debug;

use super::error::AdapterError;
use super::openai_compat::{ChatCompletionRequest, passthrough_messages, run_chat};
use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

pub const MISTRAL_API_BASE: &str = "https://api.mistral.ai/v1";

#[derive(Debug, Clone)]
pub struct MistralConfig {
    pub api_base: String,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            api_base: MISTRAL_API_BASE.to_string(),
        }
    }
}

/// Pass-through translation, no max-token ceiling.
#[derive(Debug, Clone, Default)]
pub struct MistralAdapter {
    config: MistralConfig,
}

impl MistralAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: MistralConfig {
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
        debug!(model = llm, "dispatching Mistral chat completion");
        let request = ChatCompletionRequest {
            model: llm,
            messages: passthrough_messages(conversation),
            max_tokens: None,
        };
        run_chat("Mistral", &self.config.api_base, &request, credential).await
    }
}
