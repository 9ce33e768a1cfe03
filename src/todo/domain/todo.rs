//! Task aggregate root.

use super::{TodoDescription, TodoId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task tracked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    description: TodoDescription,
    important: bool,
    completed_on: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates an incomplete task.
    #[must_use]
    pub const fn new(id: TodoId, description: TodoDescription, important: bool) -> Self {
        Self {
            id,
            description,
            important,
            completed_on: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TodoDescription {
        &self.description
    }

    /// Returns whether the task is flagged important.
    #[must_use]
    pub const fn important(&self) -> bool {
        self.important
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_on(&self) -> Option<DateTime<Utc>> {
        self.completed_on
    }

    /// Returns `true` once the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed_on.is_some()
    }

    /// Marks the task complete at the current clock time.
    ///
    /// Completing an already completed task moves the timestamp forward.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        self.completed_on = Some(clock.utc());
    }

    /// Replaces the description and importance flag.
    pub fn change(&mut self, description: TodoDescription, important: bool) {
        self.description = description;
        self.important = important;
    }
}
