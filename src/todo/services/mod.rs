//! Application services for task tracking.

mod input;
mod todos;

pub use input::{
    DESCRIPTION_REQUIRED, IMPORTANT_NOT_BOOLEAN, TodoInput, TodoInputError, ValidTodoInput,
};
pub use todos::{TodoPage, TodoService, TodoServiceError, TodoServiceResult};
