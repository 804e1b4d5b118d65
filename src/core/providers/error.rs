//! Adapter failure channel.
//!
//! One tagged error value regardless of how the vendor failed: connection
//! problems, vendor-reported HTTP errors, and bodies we cannot parse all
//! arrive here with a human-readable `Display` message the dispatcher
//! copies verbatim into the soft result.

/// Failure raised by a provider adapter.
///
/// Adapters never catch these internally; the dispatcher is the single
/// recovery point.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Request never completed (DNS, connect, TLS, read).
    #[error("Network error: {0}")]
    Network(String),

    /// Vendor answered with a non-success status; `message` is the raw body.
    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// Vendor answered 2xx but the body did not match the expected shape.
    #[error("Malformed {provider} response: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },

    /// The conversation had no messages to translate.
    #[error("Conversation is empty")]
    EmptyConversation,
}
