//! whichmodel
//!
//! Fan one conversation out to many LLM providers and compare output,
//! latency, and estimated cost.
//!
//! The crate normalizes every vendor call into the same result shape:
//! a [`InvocationResult`] carrying the generated text, an error flag,
//! the observed latency in milliseconds, and an estimated dollar cost.
//! Vendor failures never propagate; they come back as results with
//! `error == true` so one provider's outage never hides another's answer.
//!
//! ```no_run
//! use whichmodel::{Dispatcher, Message};
//!
//! # async fn demo() -> Result<(), whichmodel::DispatchError> {
//! let dispatcher = Dispatcher::new();
//! let conversation = vec![
//!     Message::system("You are a helpful assistant."),
//!     Message::user("What is the capital of France?"),
//! ];
//!
//! let result = dispatcher
//!     .invoke("OpenAI", "gpt-4o", &conversation, "sk-...")
//!     .await?;
//! println!("{} ({} ms, ${:.6})", result.output, result.speed, result.cost);
//! # Ok(())
//! # }
//! ```
//!
//! For side-by-side comparison, [`run_selections`] issues one invocation
//! per provider/model selection concurrently and reports each completion
//! into a caller-owned [`OutputStore`] keyed by selection handle.

pub mod core;

pub use crate::core::cost::{CHARS_TO_TOKEN, estimate_cost};
pub use crate::core::dispatcher::{DEFAULT_TIMEOUT, DispatchError, Dispatcher};
pub use crate::core::fanout::{
    ModelOutput, OutputStore, Selection, SelectionHandle, SelectionOutcome, run_selections,
};
pub use crate::core::providers::{Adapter, AdapterError};
pub use crate::core::types::catalog::{self, ModelInfo, ProviderInfo};
pub use crate::core::types::message::{Message, MessageRole};
pub use crate::core::types::outputs::{InvocationResult, ProviderOutput};
