//! Single entry point for one provider/model invocation.
//!
//! `invoke` resolves the provider and model against the reference catalog,
//! dispatches to the right adapter, measures latency, applies the cost
//! model, and folds every vendor failure into a soft result. The only
//! `Err` values it produces are fatal configuration errors: an unknown
//! model id or a known provider with no adapter mapped. An unknown
//! provider name, by contrast, comes back as a soft result — the caller
//! asked for something outside the catalog, which is recoverable, whereas
//! a catalog/model mismatch means the deployment itself is broken.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::cost::estimate_cost;
use crate::core::providers::Adapter;
use crate::core::types::catalog;
use crate::core::types::message::Message;
use crate::core::types::outputs::InvocationResult;

/// Safe default ceiling on one vendor call; a hung vendor must not hang its
/// selection forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const PROVIDER_NOT_FOUND: &str = "Internal error. Provider not found.";

/// Fatal configuration error, propagated to the caller of `invoke`.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Model not found in catalog: {0}")]
    ModelNotFound(String),

    #[error("No adapter mapped for provider: {0}")]
    NoAdapter(String),
}

/// Resolves provider names to adapters and normalizes every attempt into an
/// [`InvocationResult`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    adapters: HashMap<String, Adapter>,
    timeout: Duration,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher with a default-configured adapter per catalog provider.
    pub fn new() -> Self {
        let mut adapters = HashMap::new();
        for provider in catalog::PROVIDERS {
            if let Some(adapter) = Adapter::for_provider(provider.name) {
                adapters.insert(provider.name.to_ascii_lowercase(), adapter);
            }
        }
        Self {
            adapters,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the adapter used for a provider.
    ///
    /// Tests point adapters at stub servers this way.
    pub fn register(&mut self, provider: &str, adapter: Adapter) {
        self.adapters.insert(provider.to_ascii_lowercase(), adapter);
    }

    /// Invoke one model with one conversation and one credential.
    ///
    /// Never panics. Vendor failures of any shape (network error, non-2xx
    /// status, malformed body, null content, timeout) come back as
    /// `Ok(result)` with `error == true`, zero cost, and zero latency.
    pub async fn invoke(
        &self,
        provider: &str,
        llm: &str,
        conversation: &[Message],
        credential: &str,
    ) -> Result<InvocationResult, DispatchError> {
        let Some(provider_info) = catalog::find_provider(provider) else {
            warn!(provider, "unknown provider requested");
            return Ok(InvocationResult::failure(PROVIDER_NOT_FOUND));
        };

        let model = catalog::find_model(llm)
            .ok_or_else(|| DispatchError::ModelNotFound(llm.to_string()))?;

        let adapter = self
            .adapters
            .get(&provider_info.name.to_ascii_lowercase())
            .ok_or_else(|| DispatchError::NoAdapter(provider_info.name.to_string()))?;

        debug!(provider = provider_info.name, model = llm, "invoking adapter");
        let start = Instant::now();
        let outcome = tokio::time::timeout(
            self.timeout,
            adapter.run(llm, conversation, credential),
        )
        .await;
        let speed = start.elapsed().as_millis() as u64;

        let output = match outcome {
            Err(_) => {
                warn!(
                    provider = provider_info.name,
                    model = llm,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "adapter call timed out"
                );
                return Ok(InvocationResult::failure(format!(
                    "{} call timed out after {} ms.",
                    provider_info.name,
                    self.timeout.as_millis()
                )));
            }
            Ok(Err(err)) => {
                warn!(
                    provider = provider_info.name,
                    model = llm,
                    error = %err,
                    "adapter call failed"
                );
                return Ok(InvocationResult::failure(err.to_string()));
            }
            Ok(Ok(output)) => output,
        };

        if output.error {
            return Ok(InvocationResult::failure(output.output));
        }

        let cost = estimate_cost(conversation, &output.output, model);
        Ok(InvocationResult {
            output: output.output,
            error: false,
            speed,
            cost,
        })
    }
}
