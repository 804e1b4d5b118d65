//! Wire shapes shared by every OpenAI-compatible chat completion API.
//!
//! OpenAI, Groq, Mistral, Together, and Perplexity all speak this dialect;
//! only the base endpoint, the message translation, and the max-token
//! ceiling differ per vendor.

use serde::{Deserialize, Serialize};

use super::base::{bearer, post_json};
use super::error::AdapterError;
use crate::core::types::message::{Message, MessageRole};
use crate::core::types::outputs::ProviderOutput;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

pub(crate) fn role_name(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

/// Translate a conversation unchanged, full role/content pairs.
pub(crate) fn passthrough_messages(conversation: &[Message]) -> Vec<WireMessage> {
    conversation
        .iter()
        .map(|m| WireMessage {
            role: role_name(m.role),
            content: m.content.clone(),
        })
        .collect()
}

/// Pull the first choice's message content out of a parsed response.
///
/// A missing choice list is malformed and raises; a present choice with
/// null content is a soft failure, returned normally with informative text.
pub(crate) fn extract_first_choice(
    provider: &'static str,
    response: ChatCompletionResponse,
) -> Result<ProviderOutput, AdapterError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AdapterError::MalformedResponse {
            provider,
            detail: "response carried no choices".to_string(),
        })?;

    Ok(match choice.message.content {
        Some(content) => ProviderOutput::ok(content),
        None => ProviderOutput::soft_failure(format!(
            "{provider} returned a message with no content."
        )),
    })
}

/// POST to `{api_base}/chat/completions` with bearer auth and extract.
pub(crate) async fn run_chat(
    provider: &'static str,
    api_base: &str,
    request: &ChatCompletionRequest<'_>,
    credential: &str,
) -> Result<ProviderOutput, AdapterError> {
    let url = format!("{api_base}/chat/completions");
    let response: ChatCompletionResponse =
        post_json(provider, &url, &[bearer(credential)], request).await?;
    extract_first_choice(provider, response)
}
