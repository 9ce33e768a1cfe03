//! Port contracts for hypermedia rendering.
//!
//! Ports define infrastructure-agnostic interfaces used by hypermedia
//! services.

pub mod url_resolver;

#[cfg(test)]
pub use url_resolver::MockUrlResolver;
pub use url_resolver::{Route, RouteParams, RoutingError, UrlResolver};
