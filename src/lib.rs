//! Hypertodo: a task API rendered as hypermedia.
//!
//! Tasks are mapped onto format-agnostic view-models carrying links and
//! actions, then rendered as Siren, HAL, plain JSON or RFC 7807 problem
//! documents according to the client's requested format.
//!
//! # Architecture
//!
//! Hypertodo follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, route
//!   table)
//!
//! # Modules
//!
//! - [`hypermedia`]: View-models, paging, link building, transformation and
//!   output negotiation
//! - [`todo`]: Task domain, store and service
//! - [`api`]: Resource operations producing rendered replies
//! - [`config`]: Runtime configuration

pub mod api;
pub mod config;
pub mod hypermedia;
pub mod todo;
