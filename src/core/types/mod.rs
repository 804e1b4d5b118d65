//! Shared data shapes consumed by every adapter and the dispatcher.

pub mod catalog;
pub mod message;
pub mod outputs;

pub use catalog::{ModelInfo, ProviderInfo};
pub use message::{Message, MessageRole};
pub use outputs::{InvocationResult, ProviderOutput};
