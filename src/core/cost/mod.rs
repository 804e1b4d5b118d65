//! Cost estimation over character counts.
//!
//! Deliberately not a tokenizer: every provider is estimated with the same
//! fixed characters-per-token heuristic so costs stay comparable across
//! vendors even though none of them are exact.

use crate::core::types::catalog::ModelInfo;
use crate::core::types::message::Message;

/// Fixed character-to-token conversion factor applied to all providers.
pub const CHARS_TO_TOKEN: f64 = 4.0;

/// Estimate the dollar cost of one completed invocation.
///
/// `input_millions * input_rate + output_millions * output_rate + flat fee`,
/// where token counts are `chars * CHARS_TO_TOKEN / 1e6`.
pub fn estimate_cost(conversation: &[Message], output: &str, model: &ModelInfo) -> f64 {
    let input_chars: usize = conversation.iter().map(|m| m.content.chars().count()).sum();
    let input_millions = input_chars as f64 * CHARS_TO_TOKEN / 1e6;
    let output_millions = output.chars().count() as f64 * CHARS_TO_TOKEN / 1e6;

    input_millions * model.input_cost_per_million_tokens
        + output_millions * model.output_cost_per_million_tokens
        + model.request_cost.unwrap_or(0.0)
}
