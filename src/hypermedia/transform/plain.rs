//! Plain JSON representation: the view-model as-is.

use super::Representation;
use crate::hypermedia::domain::{TodoCollectionViewModel, TodoViewModel};
use serde::Serialize;

/// View-model serialised without hypermedia reshaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlainNode {
    /// A single task.
    Item(TodoViewModel),
    /// A page of tasks.
    Collection(TodoCollectionViewModel),
}

/// Renders view-models as plain JSON objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRepresentation;

impl Representation for PlainRepresentation {
    type Node = PlainNode;

    fn name(&self) -> &'static str {
        "plain JSON"
    }

    fn from_item(&self, item: &TodoViewModel, _nested_rels: Option<&[&str]>) -> PlainNode {
        PlainNode::Item(item.clone())
    }

    fn from_collection(&self, collection: &TodoCollectionViewModel) -> PlainNode {
        PlainNode::Collection(collection.clone())
    }
}
