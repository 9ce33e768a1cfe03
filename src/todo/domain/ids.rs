//! Identifier and validated scalar types for the task domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned task identifier.
///
/// Identifiers increase monotonically and are never reused within a
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyDescription`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TodoDomainError::EmptyDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an importance flag.
///
/// Accepts `true`/`false` in any letter case, ignoring surrounding
/// whitespace.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidImportance`] for any other value.
pub fn parse_importance(value: &str) -> Result<bool, TodoDomainError> {
    let normalized = value.trim();
    if normalized.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if normalized.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(TodoDomainError::InvalidImportance(value.to_owned()))
    }
}
