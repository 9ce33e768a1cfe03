//! Request inputs extracted by the boundary layer.

use crate::hypermedia::domain::{PageRequest, PagingError};
use serde::Deserialize;

/// Paging query of a collection request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CollectionQuery {
    /// Items to skip; defaults to zero.
    #[serde(default)]
    pub skip: Option<usize>,
    /// Page size; defaults to the configured page size.
    #[serde(default)]
    pub take: Option<usize>,
}

impl CollectionQuery {
    /// Creates a query with neither parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip: None,
            take: None,
        }
    }

    /// Sets `skip`.
    #[must_use]
    pub const fn with_skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets `take`.
    #[must_use]
    pub const fn with_take(mut self, take: usize) -> Self {
        self.take = Some(take);
        self
    }

    /// Resolves defaults into a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] when the effective `take` is
    /// zero.
    pub fn page_request(self, default_take: usize) -> Result<PageRequest, PagingError> {
        PageRequest::new(self.skip.unwrap_or(0), self.take.unwrap_or(default_take))
    }
}
