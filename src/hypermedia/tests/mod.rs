//! Unit tests for the hypermedia module.
//!
//! Tests are organised by pipeline stage: domain values, paging, URL
//! resolution, link building, transformation and negotiation.

mod negotiation_tests;
