//! Output encoders: one per media type.

use super::{Charset, MediaType, RenderError};
use crate::hypermedia::domain::{ProblemDocument, Renderable, RenderableKind};
use crate::hypermedia::transform::TransformerRegistry;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Kind of payload handed to an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// A single task view-model.
    Item,
    /// A collection view-model.
    Collection,
    /// A problem document.
    Problem,
}

impl PayloadKind {
    /// Returns a stable label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Collection => "collection",
            Self::Problem => "problem",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RenderableKind> for PayloadKind {
    fn from(kind: RenderableKind) -> Self {
        match kind {
            RenderableKind::Item => Self::Item,
            RenderableKind::Collection => Self::Collection,
        }
    }
}

/// Something the negotiator can render.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// A view-model routed through a transformer registry.
    ViewModel(&'a Renderable),
    /// A problem document serialised as-is.
    Problem(&'a ProblemDocument),
}

impl Payload<'_> {
    /// Returns the payload kind.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::ViewModel(Renderable::Item(_)) => PayloadKind::Item,
            Self::ViewModel(Renderable::Collection(_)) => PayloadKind::Collection,
            Self::Problem(_) => PayloadKind::Problem,
        }
    }
}

impl<'a> From<&'a Renderable> for Payload<'a> {
    fn from(value: &'a Renderable) -> Self {
        Self::ViewModel(value)
    }
}

impl<'a> From<&'a ProblemDocument> for Payload<'a> {
    fn from(value: &'a ProblemDocument) -> Self {
        Self::Problem(value)
    }
}

/// Serialises payloads for one media type.
pub trait OutputEncoder: Send + Sync {
    /// Returns the media type this encoder produces.
    fn media_type(&self) -> MediaType;

    /// Returns `true` when the encoder handles payloads of `kind`.
    fn can_encode(&self, kind: PayloadKind) -> bool;

    /// Serialises a payload to bytes in the given charset.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the payload cannot be transformed or
    /// serialised, or is of a kind this encoder does not handle.
    fn encode(&self, payload: &Payload<'_>, charset: Charset) -> Result<Vec<u8>, RenderError>;
}

fn to_bytes<T: Serialize>(value: &T, charset: Charset) -> Result<Vec<u8>, RenderError> {
    let text = serde_json::to_string(value)?;
    Ok(charset.encode(text))
}

/// Encoder backed by a transformer registry.
pub struct RepresentationEncoder<N> {
    media_type: MediaType,
    registry: Arc<TransformerRegistry<N>>,
}

impl<N> RepresentationEncoder<N> {
    /// Creates an encoder that renders `registry` output as `media_type`.
    #[must_use]
    pub const fn new(media_type: MediaType, registry: Arc<TransformerRegistry<N>>) -> Self {
        Self {
            media_type,
            registry,
        }
    }
}

impl<N> fmt::Debug for RepresentationEncoder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepresentationEncoder")
            .field("media_type", &self.media_type)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<N> OutputEncoder for RepresentationEncoder<N>
where
    N: Serialize + 'static,
{
    fn media_type(&self) -> MediaType {
        self.media_type
    }

    fn can_encode(&self, kind: PayloadKind) -> bool {
        match kind {
            PayloadKind::Item => self.registry.is_registered(RenderableKind::Item),
            PayloadKind::Collection => self.registry.is_registered(RenderableKind::Collection),
            PayloadKind::Problem => false,
        }
    }

    fn encode(&self, payload: &Payload<'_>, charset: Charset) -> Result<Vec<u8>, RenderError> {
        match payload {
            Payload::ViewModel(view_model) => {
                let node = self.registry.transform(view_model)?;
                to_bytes(&node, charset)
            }
            Payload::Problem(_) => Err(RenderError::NotEncodable {
                media_type: self.media_type,
                kind: PayloadKind::Problem,
            }),
        }
    }
}

/// Encoder for RFC 7807 problem documents; bypasses the registries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemEncoder;

impl OutputEncoder for ProblemEncoder {
    fn media_type(&self) -> MediaType {
        MediaType::Problem
    }

    fn can_encode(&self, kind: PayloadKind) -> bool {
        kind == PayloadKind::Problem
    }

    fn encode(&self, payload: &Payload<'_>, charset: Charset) -> Result<Vec<u8>, RenderError> {
        match payload {
            Payload::Problem(problem) => to_bytes(problem, charset),
            Payload::ViewModel(view_model) => Err(RenderError::NotEncodable {
                media_type: MediaType::Problem,
                kind: view_model.kind().into(),
            }),
        }
    }
}
