//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The importance flag is not a boolean literal.
    #[error("invalid importance flag '{0}', expected true or false")]
    InvalidImportance(String),
}
