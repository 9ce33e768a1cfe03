//! Transport-neutral HTTP reply.

use crate::hypermedia::negotiation::RenderedBody;

/// `Cache-Control` value carried by every reply.
pub const NO_CACHE: &str = "no-cache";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Status, headers and body produced by a resource operation.
///
/// The body is always fully rendered before the reply is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    status: u16,
    content_type: Option<String>,
    location: Option<String>,
    body: Vec<u8>,
}

impl ApiReply {
    /// Creates a `200 OK` reply without a body.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status: 200,
            content_type: None,
            location: None,
            body: Vec::new(),
        }
    }

    /// Creates a reply carrying a rendered body.
    #[must_use]
    pub fn rendered(status: u16, body: RenderedBody) -> Self {
        Self {
            status,
            content_type: Some(body.content_type()),
            location: None,
            body: body.into_bytes(),
        }
    }

    /// Creates a `text/plain` reply.
    #[must_use]
    pub fn text(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: Some(TEXT_PLAIN.to_owned()),
            location: None,
            body: message.as_bytes().to_vec(),
        }
    }

    /// Sets the `Location` header.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the `Content-Type` header, if the reply has a body.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the `Location` header, if set.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the `Cache-Control` header.
    #[must_use]
    pub const fn cache_control(&self) -> &'static str {
        NO_CACHE
    }

    /// Borrows the body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text when it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
