//! Absolute hrefs and navigational links.

use super::HypermediaDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute URI used as a link or action target.
///
/// Only the shape `scheme://authority[/path][?query]` is accepted; relative
/// references are rejected so every rendered link is directly dereferenceable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Href(String);

impl Href {
    /// Parses an absolute URI.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::InvalidHref`] when the value has no
    /// scheme, no authority, or contains whitespace.
    pub fn parse(value: impl Into<String>) -> Result<Self, HypermediaDomainError> {
        let raw = value.into();
        if is_absolute_uri(&raw) {
            Ok(Self(raw))
        } else {
            Err(HypermediaDomainError::InvalidHref(raw))
        }
    }

    /// Returns the URI as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_absolute_uri(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && scheme_chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();

    scheme_ok && !authority.is_empty() && !value.chars().any(char::is_whitespace)
}

impl TryFrom<String> for Href {
    type Error = HypermediaDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Href> for String {
    fn from(value: Href) -> Self {
        value.0
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Navigational link attached to a renderable view-model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    rel: Vec<String>,
    href: Href,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Link {
    /// Creates a link with a single relation.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::EmptyRel`] when `rel` is blank.
    pub fn new(rel: impl Into<String>, href: Href) -> Result<Self, HypermediaDomainError> {
        Self::with_rels([rel.into()], href)
    }

    /// Creates a link with an ordered set of relations.
    ///
    /// Blank values are dropped and repeated values keep their first
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::EmptyRel`] when no non-blank relation
    /// remains.
    pub fn with_rels(
        rels: impl IntoIterator<Item = String>,
        href: Href,
    ) -> Result<Self, HypermediaDomainError> {
        let mut rel: Vec<String> = Vec::new();
        for candidate in rels {
            let trimmed = candidate.trim();
            if !trimmed.is_empty() && !rel.iter().any(|existing| existing == trimmed) {
                rel.push(trimmed.to_owned());
            }
        }
        if rel.is_empty() {
            return Err(HypermediaDomainError::EmptyRel);
        }

        Ok(Self {
            rel,
            href,
            title: None,
        })
    }

    /// Sets a human-readable title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the ordered relation set.
    #[must_use]
    pub fn rel(&self) -> &[String] {
        &self.rel
    }

    /// Returns the first relation, used as the key by key-indexed formats.
    #[must_use]
    pub fn primary_rel(&self) -> &str {
        self.rel.first().map_or("", String::as_str)
    }

    /// Returns the link target.
    #[must_use]
    pub const fn href(&self) -> &Href {
        &self.href
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
