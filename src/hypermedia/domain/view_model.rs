//! Format-agnostic view-models prepared for rendering.

use super::{Action, Link};
use crate::todo::domain::Todo;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Capability shared by every renderable view-model.
///
/// Transformers only rely on this pair, so any new renderable kind must
/// expose its links and actions through it.
pub trait Hypermedia {
    /// Returns the ordered links.
    fn links(&self) -> &[Link];

    /// Returns the ordered actions.
    fn actions(&self) -> &[Action];

    /// Appends a link after the existing ones.
    fn push_link(&mut self, link: Link);

    /// Appends an action after the existing ones.
    fn push_action(&mut self, action: Action);
}

/// Single task prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoViewModel {
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_on: Option<DateTime<Utc>>,
    important: bool,
    links: Vec<Link>,
    actions: Vec<Action>,
}

impl TodoViewModel {
    /// Maps a domain task onto a view-model without links or actions.
    #[must_use]
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            description: todo.description().as_str().to_owned(),
            completed_on: todo.completed_on(),
            important: todo.important(),
            links: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion timestamp, if the task is complete.
    #[must_use]
    pub const fn completed_on(&self) -> Option<DateTime<Utc>> {
        self.completed_on
    }

    /// Returns whether the task is flagged important.
    #[must_use]
    pub const fn important(&self) -> bool {
        self.important
    }
}

impl Hypermedia for TodoViewModel {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// Page of tasks prepared for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoCollectionViewModel {
    items: Vec<TodoViewModel>,
    links: Vec<Link>,
    actions: Vec<Action>,
}

impl TodoCollectionViewModel {
    /// Creates a collection that owns the given items.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = TodoViewModel>) -> Self {
        Self {
            items: items.into_iter().collect(),
            links: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Returns the items in page order.
    #[must_use]
    pub fn items(&self) -> &[TodoViewModel] {
        &self.items
    }
}

impl Hypermedia for TodoCollectionViewModel {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }
}

/// Discriminant used to key transformer registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderableKind {
    /// A single task.
    Item,
    /// A page of tasks.
    Collection,
}

impl RenderableKind {
    /// Returns a stable label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Collection => "collection",
        }
    }
}

impl fmt::Display for RenderableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of view-models the rendering pipeline accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// A single task.
    Item(TodoViewModel),
    /// A page of tasks.
    Collection(TodoCollectionViewModel),
}

impl Renderable {
    /// Returns the variant discriminant.
    #[must_use]
    pub const fn kind(&self) -> RenderableKind {
        match self {
            Self::Item(_) => RenderableKind::Item,
            Self::Collection(_) => RenderableKind::Collection,
        }
    }

    /// Borrows the hypermedia capability of the wrapped view-model.
    #[must_use]
    pub fn hypermedia(&self) -> &dyn Hypermedia {
        match self {
            Self::Item(item) => item,
            Self::Collection(collection) => collection,
        }
    }
}

impl From<TodoViewModel> for Renderable {
    fn from(value: TodoViewModel) -> Self {
        Self::Item(value)
    }
}

impl From<TodoCollectionViewModel> for Renderable {
    fn from(value: TodoCollectionViewModel) -> Self {
        Self::Collection(value)
    }
}
