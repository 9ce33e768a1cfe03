//! Task tracking for the hypermedia API.
//!
//! Tasks are the only resource the API exposes. The module follows the same
//! hexagonal layout as [`crate::hypermedia`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
