//! Groq chat adapter.
//!
//! Groq exposes an OpenAI-compatible surface under `/openai/v1`.

use tracing::debug;

use super::error::AdapterError;
use super::openai_compat::{ChatCompletionRequest, passthrough_messages, run_chat};
use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_base: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_base: GROQ_API_BASE.to_string(),
        }
    }
}

/// Pass-through translation, no max-token ceiling.
#[derive(Debug, Clone, Default)]
pub struct GroqAdapter {
    config: GroqConfig,
}

impl GroqAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: GroqConfig {
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
        debug!(model = llm, "dispatching Groq chat completion");
        let request = ChatCompletionRequest {
            model: llm,
            messages: passthrough_messages(conversation),
            max_tokens: None,
        };
        run_chat("Groq", &self.config.api_base, &request, credential).await
    }
}
