//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod store;

pub use store::{TodoStore, TodoStoreError, TodoStoreResult};
