//! Vendor adapters behind an enum-based dispatch.
//!
//! One variant per provider; the dispatcher resolves a provider name to a
//! variant once and calls [`Adapter::run`] without string matching at the
//! call site. Adapters translate the canonical conversation into the
//! vendor's wire shape, perform exactly one network call, and either parse
//! a [`ProviderOutput`](crate::core::types::outputs::ProviderOutput) or
//! raise an [`AdapterError`] for the dispatcher to normalize. They never
//! swallow vendor failures themselves.

pub mod anthropic;
pub mod cohere;
pub mod groq;
pub mod mistral;
pub mod openai;
pub mod perplexity;
pub mod together;

mod base;
mod error;
mod openai_compat;

pub use anthropic::AnthropicAdapter;
pub use cohere::CohereAdapter;
pub use error::AdapterError;
pub use groq::GroqAdapter;
pub use mistral::MistralAdapter;
pub use openai::OpenAiAdapter;
pub use perplexity::PerplexityAdapter;
pub use together::TogetherAdapter;

use crate::core::types::message::Message;
use crate::core::types::outputs::ProviderOutput;

/// Closed set of provider adapters.
#[derive(Debug, Clone)]
pub enum Adapter {
    OpenAi(OpenAiAdapter),
    Anthropic(AnthropicAdapter),
    Cohere(CohereAdapter),
    Groq(GroqAdapter),
    Mistral(MistralAdapter),
    Together(TogetherAdapter),
    Perplexity(PerplexityAdapter),
}

impl Adapter {
    /// Default-configured adapter for a provider name, case-insensitively.
    pub fn for_provider(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "openai" => Some(Self::OpenAi(OpenAiAdapter::new())),
            "anthropic" => Some(Self::Anthropic(AnthropicAdapter::new())),
            "cohere" => Some(Self::Cohere(CohereAdapter::new())),
            "groq" => Some(Self::Groq(GroqAdapter::new())),
            "mistral" => Some(Self::Mistral(MistralAdapter::new())),
            "together" => Some(Self::Together(TogetherAdapter::new())),
            "perplexity" => Some(Self::Perplexity(PerplexityAdapter::new())),
            _ => None,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            Adapter::OpenAi(_) => "OpenAI",
            Adapter::Anthropic(_) => "Anthropic",
            Adapter::Cohere(_) => "Cohere",
            Adapter::Groq(_) => "Groq",
            Adapter::Mistral(_) => "Mistral",
            Adapter::Together(_) => "Together",
            Adapter::Perplexity(_) => "Perplexity",
        }
    }

    /// Translate, call the vendor once, and parse.
    ///
    /// `speed` on the returned output is always 0 here; the dispatcher
    /// finalizes timing.
    pub async fn run(
        &self,
        llm: &str,
        conversation: &[Message],
        credential: &str,
    ) -> Result<ProviderOutput, AdapterError> {
        match self {
            Adapter::OpenAi(a) => a.run(llm, conversation, credential).await,
            Adapter::Anthropic(a) => a.run(llm, conversation, credential).await,
            Adapter::Cohere(a) => a.run(llm, conversation, credential).await,
            Adapter::Groq(a) => a.run(llm, conversation, credential).await,
            Adapter::Mistral(a) => a.run(llm, conversation, credential).await,
            Adapter::Together(a) => a.run(llm, conversation, credential).await,
            Adapter::Perplexity(a) => a.run(llm, conversation, credential).await,
        }
    }
}
