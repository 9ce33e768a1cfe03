//! In-memory task store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoDescription, TodoId},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in identifier order so listing is stable for paging.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<BTreeMap<TodoId, Todo>>>,
    last_id: Arc<AtomicU64>,
}

impl InMemoryTodoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `count` tasks named `Task (0)`, `Task (1)`, ...
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Storage`] if the store lock is poisoned.
    pub fn seeded(count: usize) -> TodoStoreResult<Self> {
        let store = Self::new();
        {
            let mut state = store.state.write().map_err(poisoned)?;
            for index in 0..count {
                let description = TodoDescription::new(format!("Task ({index})"))
                    .map_err(TodoStoreError::storage)?;
                let todo = Todo::new(store.next_id(), description, false);
                state.insert(todo.id(), todo);
            }
        }
        Ok(store)
    }

    fn next_id(&self) -> TodoId {
        TodoId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> TodoStoreError {
    TodoStoreError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> TodoStoreResult<Vec<Todo>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.values().cloned().collect())
    }

    async fn get(&self, id: TodoId) -> TodoStoreResult<Option<Todo>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn add(&self, description: TodoDescription, important: bool) -> TodoStoreResult<Todo> {
        let mut state = self.state.write().map_err(poisoned)?;
        let todo = Todo::new(self.next_id(), description, important);
        state.insert(todo.id(), todo.clone());
        tracing::debug!(id = %todo.id(), "task added");
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> TodoStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .get_mut(&todo.id())
            .ok_or(TodoStoreError::NotFound(todo.id()))?;
        *slot = todo.clone();
        tracing::debug!(id = %todo.id(), "task updated");
        Ok(())
    }

    async fn remove(&self, id: TodoId) -> TodoStoreResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        let removed = state.remove(&id).is_some();
        tracing::debug!(id = %id, removed, "task removal requested");
        Ok(removed)
    }

    async fn count(&self) -> TodoStoreResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.len())
    }
}
