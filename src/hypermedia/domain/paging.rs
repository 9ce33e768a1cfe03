//! Offset/limit pagination planning.

use super::PagingError;
use std::fmt;

/// Navigation direction of a paging link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// The page before the current one.
    Previous,
    /// The page after the current one.
    Next,
    /// The current page.
    Current,
}

impl PageDirection {
    /// Returns the link relation for this direction.
    #[must_use]
    pub const fn as_rel(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Current => "self",
        }
    }
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_rel())
    }
}

/// Page coordinates consumed immediately to build a collection link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingDescriptor {
    /// Link direction.
    pub direction: PageDirection,
    /// Number of items skipped before the page.
    pub offset: usize,
    /// Number of items on the page.
    pub page_size: usize,
}

impl PagingDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(direction: PageDirection, offset: usize, page_size: usize) -> Self {
        Self {
            direction,
            offset,
            page_size,
        }
    }
}

/// Validated `skip`/`take` pair from a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: usize,
    take: usize,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroPageSize`] when `take` is zero.
    pub const fn new(skip: usize, take: usize) -> Result<Self, PagingError> {
        if take == 0 {
            return Err(PagingError::ZeroPageSize);
        }
        Ok(Self { skip, take })
    }

    /// Returns the number of items to skip.
    #[must_use]
    pub const fn skip(self) -> usize {
        self.skip
    }

    /// Returns the page size.
    #[must_use]
    pub const fn take(self) -> usize {
        self.take
    }

    /// Returns the descriptor for the requested page itself.
    #[must_use]
    pub const fn current(self) -> PagingDescriptor {
        PagingDescriptor::new(PageDirection::Current, self.skip, self.take)
    }

    /// Returns the full collection link plan: `[previous?, next?, self]`.
    #[must_use]
    pub fn links_for(self, total: usize) -> Vec<PagingDescriptor> {
        let mut pages = plan_pages(self, total);
        pages.push(self.current());
        pages
    }
}

/// Computes the `previous`/`next` descriptors for a page.
///
/// `previous` is offered whenever `skip - take` is non-negative, even when
/// `skip` lies beyond `total`; `next` only while `skip + take` still points
/// at an existing item. The current page is not included.
///
/// # Errors
///
/// Returns [`PagingError::ZeroPageSize`] when `take` is zero.
///
/// # Examples
///
/// ```
/// use hypertodo::hypermedia::domain::{PageDirection, PagingDescriptor, plan};
///
/// let pages = plan(0, 2, 4).expect("valid page size");
/// assert_eq!(pages, vec![PagingDescriptor::new(PageDirection::Next, 2, 2)]);
/// ```
pub fn plan(skip: usize, take: usize, total: usize) -> Result<Vec<PagingDescriptor>, PagingError> {
    Ok(plan_pages(PageRequest::new(skip, take)?, total))
}

fn plan_pages(request: PageRequest, total: usize) -> Vec<PagingDescriptor> {
    let PageRequest { skip, take } = request;
    let mut pages = Vec::with_capacity(3);

    if let Some(offset) = skip.checked_sub(take) {
        pages.push(PagingDescriptor::new(PageDirection::Previous, offset, take));
    }
    if let Some(offset) = skip.checked_add(take).filter(|offset| *offset < total) {
        pages.push(PagingDescriptor::new(PageDirection::Next, offset, take));
    }

    pages
}
