//! Together chat adapter.
//!
//! Identical wire shape to OpenAI against Together's endpoint. A max-token
//! ceiling is always set: at least one hosted model over-generates without
//! it.

use tracing::debug;

use super::error::AdapterError;
use super::openai_compat::{ChatCompletionRequest, passthrough_messages, run_chat};
use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

pub const TOGETHER_API_BASE: &str = "https://api.together.xyz/v1";
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Clone)]
pub struct TogetherConfig {
    pub api_base: String,
}

impl Default for TogetherConfig {
    fn default() -> Self {
        Self {
            api_base: TOGETHER_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TogetherAdapter {
    config: TogetherConfig,
}

impl TogetherAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            config: TogetherConfig {
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
        debug!(model = llm, "dispatching Together chat completion");
        let request = ChatCompletionRequest {
            model: llm,
            messages: passthrough_messages(conversation),
            max_tokens: Some(MAX_OUTPUT_TOKENS),
        };
        run_chat("Together", &self.config.api_base, &request, credential).await
    }
}
