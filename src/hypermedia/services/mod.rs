//! Hypermedia services.

mod link_builder;

pub use link_builder::{LinkBuildError, LinkBuilder};
