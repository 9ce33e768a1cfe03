//! Domain model for hypermedia rendering.
//!
//! View-models, links, actions and paging descriptors are plain values with
//! no knowledge of the wire formats they are later rendered into.

mod action;
mod error;
mod link;
mod paging;
mod problem;
mod view_model;

pub use action::{Action, Field, FieldType, HttpMethod};
pub use error::{HypermediaDomainError, PagingError};
pub use link::{Href, Link};
pub use paging::{PageDirection, PageRequest, PagingDescriptor, plan};
pub use problem::{
    DEFAULT_PROBLEM_TYPE, INTERNAL_PROBLEM_TYPE, InvalidParameters, ProblemDocument,
};
pub use view_model::{
    Hypermedia, Renderable, RenderableKind, TodoCollectionViewModel, TodoViewModel,
};
