//! Service layer for task lookup, paging and mutation.

use super::input::{TodoInput, TodoInputError};
use crate::hypermedia::domain::PageRequest;
use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoStore, TodoStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Client input failed validation.
    #[error(transparent)]
    Input(#[from] TodoInputError),

    /// The requested task does not exist.
    #[error("task not found: {0}")]
    NotFound(TodoId),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
}

/// Result type for task service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// One page of tasks plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    /// Tasks on the page, ordered by identifier.
    pub items: Vec<Todo>,
    /// Number of tasks across all pages.
    pub total: usize,
}

/// Task orchestration service.
#[derive(Clone)]
pub struct TodoService<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TodoService<S, C>
where
    S: TodoStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Returns the requested page of tasks in identifier order.
    ///
    /// The total is the store's own count, not the length of the listing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store fails.
    pub async fn page(&self, request: PageRequest) -> TodoServiceResult<TodoPage> {
        let total = self.store.count().await?;
        let items = self
            .store
            .list()
            .await?
            .into_iter()
            .skip(request.skip())
            .take(request.take())
            .collect();
        Ok(TodoPage { items, total })
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task does not exist,
    /// or [`TodoServiceError::Store`] when the lookup fails.
    pub async fn get(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.store
            .get(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Validates input and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Input`] when validation fails or
    /// [`TodoServiceError::Store`] when the store rejects the task.
    pub async fn create(&self, input: &TodoInput) -> TodoServiceResult<Todo> {
        let valid = input.validate()?;
        Ok(self.store.add(valid.description, valid.important).await?)
    }

    /// Marks a task complete at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task does not exist,
    /// or [`TodoServiceError::Store`] when persistence fails.
    pub async fn complete(&self, id: TodoId) -> TodoServiceResult<Todo> {
        let mut todo = self.get(id).await?;
        todo.mark_complete(&*self.clock);
        self.store.update(&todo).await?;
        Ok(todo)
    }

    /// Replaces a task's description and importance flag.
    ///
    /// Existence is checked before the input is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task does not exist,
    /// [`TodoServiceError::Input`] when validation fails, or
    /// [`TodoServiceError::Store`] when persistence fails.
    pub async fn update(&self, id: TodoId, input: &TodoInput) -> TodoServiceResult<Todo> {
        let mut todo = self.get(id).await?;
        let valid = input.validate()?;
        todo.change(valid.description, valid.important);
        self.store.update(&todo).await?;
        Ok(todo)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task does not exist,
    /// or [`TodoServiceError::Store`] when removal fails.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        if self.store.remove(id).await? {
            Ok(())
        } else {
            Err(TodoServiceError::NotFound(id))
        }
    }
}
