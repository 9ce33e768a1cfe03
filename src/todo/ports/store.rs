//! Store port for task lookup and mutation.

use crate::todo::domain::{Todo, TodoDescription, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Task store contract.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns every task ordered by ascending identifier.
    async fn list(&self) -> TodoStoreResult<Vec<Todo>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: TodoId) -> TodoStoreResult<Option<Todo>>;

    /// Stores a new task under a freshly assigned identifier.
    async fn add(&self, description: TodoDescription, important: bool) -> TodoStoreResult<Todo>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::NotFound`] when the task does not exist.
    async fn update(&self, todo: &Todo) -> TodoStoreResult<()>;

    /// Removes a task, returning `false` when it did not exist.
    async fn remove(&self, id: TodoId) -> TodoStoreResult<bool>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TodoStoreResult<usize>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TodoId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
