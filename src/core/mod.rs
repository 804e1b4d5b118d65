//! Multi-provider invocation and normalization layer.
//!
//! Leaves first: shared [`types`], the pure [`cost`] estimator, one
//! [`providers`] adapter per vendor, the [`dispatcher`] that folds every
//! failure mode into a uniform result, and the [`fanout`] orchestrator
//! that runs many selections concurrently against one conversation.

pub mod cost;
pub mod dispatcher;
pub mod fanout;
pub mod providers;
pub mod types;
