//! Step definitions for task API behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
