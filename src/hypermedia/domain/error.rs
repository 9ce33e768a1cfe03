//! Error types for hypermedia value construction and paging.

use thiserror::Error;

/// Errors returned while constructing hypermedia domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HypermediaDomainError {
    /// A link was built without any non-blank relation.
    #[error("links must have at least one rel attribute")]
    EmptyRel,

    /// The link or action target is not an absolute URI.
    #[error("invalid href '{0}', expected an absolute URI")]
    InvalidHref(String),

    /// An action was built with a blank name.
    #[error("action name must not be empty")]
    EmptyActionName,

    /// A form field was built with a blank name.
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// A problem document was given a status outside the HTTP range.
    #[error("invalid HTTP status code {0}")]
    InvalidStatus(u16),
}

/// Errors returned by the pagination planner.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PagingError {
    /// The requested page size was zero.
    #[error("take must be greater than zero.")]
    ZeroPageSize,
}
