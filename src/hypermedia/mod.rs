//! Hypermedia rendering of task resources.
//!
//! View-models are enriched with links and actions by the [`services`]
//! layer, reshaped per wire format by [`transform`] and encoded by the
//! [`negotiation`] layer. URL construction sits behind the
//! [`ports::UrlResolver`] port.

pub mod adapters;
pub mod domain;
pub mod negotiation;
pub mod ports;
pub mod services;
pub mod transform;

#[cfg(test)]
mod tests;
