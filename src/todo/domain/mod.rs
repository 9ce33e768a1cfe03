//! Domain model for task tracking.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::{TodoDescription, TodoId, parse_importance};
pub use todo::Todo;
