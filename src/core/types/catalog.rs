//! Built-in reference catalog of providers and models.
//!
//! Immutable data the dispatcher resolves identifiers against before any
//! network call. Pricing is per million tokens in USD; a few hosted models
//! also bill a flat per-request fee.

/// A vendor identity known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Display name, also the key callers pass to `invoke`.
    pub name: &'static str,
    /// Conventional environment variable holding this vendor's API key.
    pub key_hint: &'static str,
}

/// One invocable model and its pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInfo {
    /// Vendor-side model identifier.
    pub llm: &'static str,
    /// Owning provider's display name.
    pub provider: &'static str,
    /// Context window in tokens.
    pub context_window: u32,
    pub input_cost_per_million_tokens: f64,
    pub output_cost_per_million_tokens: f64,
    /// Flat fee billed per request on top of token costs.
    pub request_cost: Option<f64>,
    /// Preselected model for its provider in comparison UIs.
    pub is_default: bool,
}

pub const PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        name: "OpenAI",
        key_hint: "OPENAI_API_KEY",
    },
    ProviderInfo {
        name: "Anthropic",
        key_hint: "ANTHROPIC_API_KEY",
    },
    ProviderInfo {
        name: "Groq",
        key_hint: "GROQ_API_KEY",
    },
    ProviderInfo {
        name: "Together",
        key_hint: "TOGETHER_API_KEY",
    },
    ProviderInfo {
        name: "Mistral",
        key_hint: "MISTRAL_API_KEY",
    },
    ProviderInfo {
        name: "Cohere",
        key_hint: "COHERE_API_KEY",
    },
    ProviderInfo {
        name: "Perplexity",
        key_hint: "PERPLEXITY_API_KEY",
    },
];

pub const MODELS: &[ModelInfo] = &[
    // OpenAI
    ModelInfo {
        llm: "gpt-4o",
        provider: "OpenAI",
        context_window: 128_000,
        input_cost_per_million_tokens: 5.0,
        output_cost_per_million_tokens: 15.0,
        request_cost: None,
        is_default: true,
    },
    ModelInfo {
        llm: "gpt-4-turbo",
        provider: "OpenAI",
        context_window: 128_000,
        input_cost_per_million_tokens: 10.0,
        output_cost_per_million_tokens: 30.0,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "gpt-4-0125-preview",
        provider: "OpenAI",
        context_window: 128_000,
        input_cost_per_million_tokens: 10.0,
        output_cost_per_million_tokens: 30.0,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "gpt-3.5-turbo-0125",
        provider: "OpenAI",
        context_window: 16_385,
        input_cost_per_million_tokens: 0.5,
        output_cost_per_million_tokens: 1.5,
        request_cost: None,
        is_default: false,
    },
    // Anthropic
    ModelInfo {
        llm: "claude-3-opus-20240229",
        provider: "Anthropic",
        context_window: 200_000,
        input_cost_per_million_tokens: 15.0,
        output_cost_per_million_tokens: 75.0,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "claude-3-sonnet-20240229",
        provider: "Anthropic",
        context_window: 200_000,
        input_cost_per_million_tokens: 3.0,
        output_cost_per_million_tokens: 15.0,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "claude-3-haiku-20240307",
        provider: "Anthropic",
        context_window: 200_000,
        input_cost_per_million_tokens: 0.25,
        output_cost_per_million_tokens: 1.25,
        request_cost: None,
        is_default: false,
    },
    // Groq
    ModelInfo {
        llm: "llama3-8b-8192",
        provider: "Groq",
        context_window: 8_192,
        input_cost_per_million_tokens: 0.05,
        output_cost_per_million_tokens: 0.1,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "llama3-70b-8192",
        provider: "Groq",
        context_window: 8_192,
        input_cost_per_million_tokens: 0.59,
        output_cost_per_million_tokens: 0.79,
        request_cost: None,
        is_default: true,
    },
    ModelInfo {
        llm: "mixtral-8x7b-32768",
        provider: "Groq",
        context_window: 32_768,
        input_cost_per_million_tokens: 0.27,
        output_cost_per_million_tokens: 0.27,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "gemma-7b-it",
        provider: "Groq",
        context_window: 8_192,
        input_cost_per_million_tokens: 0.1,
        output_cost_per_million_tokens: 0.1,
        request_cost: None,
        is_default: false,
    },
    // Together
    ModelInfo {
        llm: "google/gemma-7b-it",
        provider: "Together",
        context_window: 8_192,
        input_cost_per_million_tokens: 0.2,
        output_cost_per_million_tokens: 0.2,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "google/gemma-2b-it",
        provider: "Together",
        context_window: 8_192,
        input_cost_per_million_tokens: 0.1,
        output_cost_per_million_tokens: 0.1,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "mistralai/Mixtral-8x22B-Instruct-v0.1",
        provider: "Together",
        context_window: 65_536,
        input_cost_per_million_tokens: 1.2,
        output_cost_per_million_tokens: 1.2,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "meta-llama/Llama-3-70b-chat-hf",
        provider: "Together",
        context_window: 8_000,
        input_cost_per_million_tokens: 0.9,
        output_cost_per_million_tokens: 0.9,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "meta-llama/Llama-3-8b-chat-hf",
        provider: "Together",
        context_window: 8_000,
        input_cost_per_million_tokens: 0.2,
        output_cost_per_million_tokens: 0.2,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "databricks/dbrx-instruct",
        provider: "Together",
        context_window: 32_000,
        input_cost_per_million_tokens: 1.2,
        output_cost_per_million_tokens: 1.2,
        request_cost: None,
        is_default: false,
    },
    // Mistral
    ModelInfo {
        llm: "open-mistral-7b",
        provider: "Mistral",
        context_window: 32_768,
        input_cost_per_million_tokens: 0.25,
        output_cost_per_million_tokens: 0.25,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "open-mixtral-8x7b",
        provider: "Mistral",
        context_window: 32_768,
        input_cost_per_million_tokens: 0.7,
        output_cost_per_million_tokens: 0.7,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "mistral-small-latest",
        provider: "Mistral",
        context_window: 32_768,
        input_cost_per_million_tokens: 2.0,
        output_cost_per_million_tokens: 6.0,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "mistral-medium-latest",
        provider: "Mistral",
        context_window: 32_768,
        input_cost_per_million_tokens: 2.7,
        output_cost_per_million_tokens: 8.1,
        request_cost: None,
        is_default: false,
    },
    ModelInfo {
        llm: "mistral-large-latest",
        provider: "Mistral",
        context_window: 32_768,
        input_cost_per_million_tokens: 8.0,
        output_cost_per_million_tokens: 24.0,
        request_cost: None,
        is_default: false,
    },
    // Cohere
    ModelInfo {
        llm: "command-r-plus",
        provider: "Cohere",
        context_window: 128_000,
        input_cost_per_million_tokens: 3.0,
        output_cost_per_million_tokens: 15.0,
        request_cost: None,
        is_default: false,
    },
    // Perplexity
    ModelInfo {
        llm: "llama-3-sonar-small-32k-online",
        provider: "Perplexity",
        context_window: 28_000,
        input_cost_per_million_tokens: 0.2,
        output_cost_per_million_tokens: 0.2,
        request_cost: Some(0.005),
        is_default: false,
    },
    ModelInfo {
        llm: "llama-3-sonar-large-32k-online",
        provider: "Perplexity",
        context_window: 28_000,
        input_cost_per_million_tokens: 0.6,
        output_cost_per_million_tokens: 0.6,
        request_cost: Some(0.005),
        is_default: false,
    },
];

/// Look up a provider by display name, case-insensitively.
pub fn find_provider(name: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Look up a model by its vendor-side identifier.
pub fn find_model(llm: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.llm == llm)
}

/// All models owned by one provider, in catalog order.
pub fn models_for(provider: &str) -> Vec<&'static ModelInfo> {
    MODELS
        .iter()
        .filter(|m| m.provider.eq_ignore_ascii_case(provider))
        .collect()
}

/// The preselected model for a provider, falling back to its first entry.
pub fn default_model(provider: &str) -> Option<&'static ModelInfo> {
    let models = models_for(provider);
    models
        .iter()
        .find(|m| m.is_default)
        .copied()
        .or_else(|| models.first().copied())
}
