//! Raw task input and its validation.

use crate::hypermedia::domain::InvalidParameters;
use crate::todo::domain::{TodoDescription, parse_importance};
use thiserror::Error;

/// Message reported for a missing or blank description.
pub const DESCRIPTION_REQUIRED: &str = "the description field is required.";

/// Message reported for an importance flag that is not a boolean.
pub const IMPORTANT_NOT_BOOLEAN: &str = "could not convert value to a boolean (true/false).";

/// Unvalidated task fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
    description: Option<String>,
    important: Option<String>,
}

impl TodoInput {
    /// Creates an empty input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: None,
            important: None,
        }
    }

    /// Sets the raw description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw importance flag.
    #[must_use]
    pub fn with_important(mut self, important: impl Into<String>) -> Self {
        self.important = Some(important.into());
        self
    }

    /// Validates every field, collecting all violations.
    ///
    /// # Errors
    ///
    /// Returns [`TodoInputError`] listing each invalid field.
    pub fn validate(&self) -> Result<ValidTodoInput, TodoInputError> {
        let mut violations = InvalidParameters::new();

        let description = self
            .description
            .as_deref()
            .map(TodoDescription::new)
            .and_then(Result::ok);
        if description.is_none() {
            violations
                .entry("description".to_owned())
                .or_default()
                .push(DESCRIPTION_REQUIRED.to_owned());
        }

        let important = self
            .important
            .as_deref()
            .map(parse_importance)
            .and_then(Result::ok);
        if important.is_none() {
            violations
                .entry("important".to_owned())
                .or_default()
                .push(IMPORTANT_NOT_BOOLEAN.to_owned());
        }

        match (description, important) {
            (Some(description), Some(important)) => Ok(ValidTodoInput {
                description,
                important,
            }),
            _ => Err(TodoInputError { violations }),
        }
    }
}

/// Task fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTodoInput {
    /// Validated description.
    pub description: TodoDescription,
    /// Parsed importance flag.
    pub important: bool,
}

/// Field-level validation failures for task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task input")]
pub struct TodoInputError {
    violations: InvalidParameters,
}

impl TodoInputError {
    /// Returns the field name to messages map.
    #[must_use]
    pub const fn violations(&self) -> &InvalidParameters {
        &self.violations
    }

    /// Consumes the error, returning the violations.
    #[must_use]
    pub fn into_violations(self) -> InvalidParameters {
        self.violations
    }
}
