//! Unit tests for the task module.

mod input_tests;
mod service_tests;
