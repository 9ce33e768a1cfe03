//! Errors raised while negotiating and rendering a response body.

use super::{MediaType, PayloadKind};
use crate::hypermedia::transform::TransformError;
use std::sync::Arc;
use thiserror::Error;

/// No encoder matches what the client asked for.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NegotiationError {
    /// The requested format or media types cannot represent the payload.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Errors raised while producing body bytes.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Negotiation failed before rendering started.
    #[error(transparent)]
    Negotiation(#[from] NegotiationError),

    /// The view-model could not be transformed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The format tree could not be serialised.
    #[error("failed to serialise response body: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The selected encoder does not handle this payload kind.
    #[error("{media_type} encoder cannot encode a {kind} payload")]
    NotEncodable {
        /// Encoder that was selected.
        media_type: MediaType,
        /// Payload kind it was handed.
        kind: PayloadKind,
    },
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
