//! Unit tests for the boundary layer.
