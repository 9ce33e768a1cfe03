//! Boundary layer: resource operations over tasks.
//!
//! Operations take already-extracted request inputs and return a fully
//! rendered [`ApiReply`]; binding them to an HTTP server is left to the
//! caller.

mod reply;
mod request;
mod resource;
mod responder;

pub use reply::{ApiReply, NO_CACHE};
pub use request::CollectionQuery;
pub use resource::{InMemoryTodoResource, ResourceInitError, TodoResource};
pub use responder::{ApiError, NOT_FOUND_MESSAGE, Responder};

#[cfg(test)]
mod tests;
