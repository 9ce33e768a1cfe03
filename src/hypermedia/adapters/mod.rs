//! Adapter implementations for hypermedia ports.

pub mod route_table;

pub use route_table::RouteTableResolver;
