//! In-memory adapters for task tracking.

mod store;

pub use store::InMemoryTodoStore;
