//! Fan one conversation out to many provider/model selections.
//!
//! Each selection is an independent task reporting into an externally owned
//! keyed store; completion order never matters and no selection's outcome
//! depends on a sibling's. Keys are caller-assigned handles rather than
//! model identifiers because the same model may be selected more than once.

use std::collections::HashMap;

use dashmap::DashMap;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::core::dispatcher::{DispatchError, Dispatcher};
use crate::core::types::message::Message;
use crate::core::types::outputs::InvocationResult;

/// Caller-assigned unique key for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionHandle(String);

impl SelectionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SelectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One provider/model pair to invoke against the shared conversation.
#[derive(Debug, Clone)]
pub struct Selection {
    pub handle: SelectionHandle,
    pub provider: String,
    pub llm: String,
}

impl Selection {
    pub fn new(
        handle: SelectionHandle,
        provider: impl Into<String>,
        llm: impl Into<String>,
    ) -> Self {
        Self {
            handle,
            provider: provider.into(),
            llm: llm.into(),
        }
    }
}

/// Per-selection entry in the output store.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// No completion reported yet (or the selection was skipped).
    Pending,
    Ready(InvocationResult),
}

impl ModelOutput {
    pub fn is_pending(&self) -> bool {
        matches!(self, ModelOutput::Pending)
    }
}

/// Caller-owned store of per-selection outputs, keyed by handle.
///
/// One writer per key; completed invocations update only their own entry.
#[derive(Debug, Default)]
pub struct OutputStore {
    entries: DashMap<SelectionHandle, ModelOutput>,
}

impl OutputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a handle pending, e.g. when a new run supersedes an old one.
    pub fn reset(&self, handle: SelectionHandle) {
        self.entries.insert(handle, ModelOutput::Pending);
    }

    pub fn set_ready(&self, handle: SelectionHandle, result: InvocationResult) {
        self.entries.insert(handle, ModelOutput::Ready(result));
    }

    pub fn get(&self, handle: &SelectionHandle) -> Option<ModelOutput> {
        self.entries.get(handle).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How one selection ended.
#[derive(Debug)]
pub enum SelectionOutcome {
    /// The dispatcher produced a result (success or soft failure) and the
    /// store entry was updated.
    Completed,
    /// No credential for the selection's provider; the store entry was left
    /// untouched.
    Skipped,
    /// Fatal configuration error. Affects this selection only.
    Fatal(DispatchError),
}

/// Invoke every selection concurrently against one conversation.
///
/// Credentials are keyed by provider name (case-insensitive). Completions
/// are written into `store` as they arrive, in whatever order the vendors
/// answer; the returned outcomes let callers tell a skip from a fatal error
/// without inspecting the store.
pub async fn run_selections(
    dispatcher: &Dispatcher,
    selections: Vec<Selection>,
    conversation: &[Message],
    credentials: &HashMap<String, String>,
    store: &OutputStore,
) -> Vec<(SelectionHandle, SelectionOutcome)> {
    let mut in_flight = FuturesUnordered::new();
    let mut outcomes = Vec::with_capacity(selections.len());

    for selection in selections {
        let Some(credential) = credential_for(credentials, &selection.provider) else {
            debug!(
                provider = %selection.provider,
                handle = %selection.handle.as_str(),
                "no credential for provider; selection left pending"
            );
            outcomes.push((selection.handle, SelectionOutcome::Skipped));
            continue;
        };
        in_flight.push(async move {
            let result = dispatcher
                .invoke(&selection.provider, &selection.llm, conversation, credential)
                .await;
            (selection.handle, result)
        });
    }

    while let Some((handle, result)) = in_flight.next().await {
        match result {
            Ok(result) => {
                store.set_ready(handle.clone(), result);
                outcomes.push((handle, SelectionOutcome::Completed));
            }
            Err(err) => {
                error!(
                    handle = %handle.as_str(),
                    error = %err,
                    "selection failed with a configuration error"
                );
                outcomes.push((handle, SelectionOutcome::Fatal(err)));
            }
        }
    }

    outcomes
}

fn credential_for<'a>(
    credentials: &'a HashMap<String, String>,
    provider: &str,
) -> Option<&'a str> {
    credentials
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(provider))
        .map(|(_, value)| value.as_str())
}
