//! Normalized result shapes returned by adapters and the dispatcher.

use serde::{Deserialize, Serialize};

/// Raw result of one adapter call, before cost is attached.
///
/// Adapters always leave `speed` at 0; the dispatcher owns timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOutput {
    /// Generated text, or a human-readable failure description.
    pub output: String,
    /// True when `output` describes a failure instead of a completion.
    pub error: bool,
    /// Latency in milliseconds, finalized by the dispatcher.
    pub speed: u64,
}

impl ProviderOutput {
    /// A successful completion.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: false,
            speed: 0,
        }
    }

    /// A soft failure: returned normally, never raised.
    pub fn soft_failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: true,
            speed: 0,
        }
    }
}

/// Per-model unit returned to the caller for one invocation.
///
/// `error == true` fixes both `speed` and `cost` to 0: descriptive failure
/// text is never billed as generated tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub output: String,
    pub error: bool,
    pub speed: u64,
    pub cost: f64,
}

impl InvocationResult {
    /// A failure normalized into result shape, with zero cost and latency.
    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: true,
            speed: 0,
            cost: 0.0,
        }
    }
}
