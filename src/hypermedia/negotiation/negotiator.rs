//! Encoder selection and body rendering.

use super::{
    Charset, FormatRequest, MediaType, NegotiationError, OutputEncoder, Payload, PayloadKind,
    ProblemEncoder, RenderError, RepresentationEncoder,
};
use crate::hypermedia::domain::ProblemDocument;
use crate::hypermedia::transform::{
    HalRepresentation, PlainRepresentation, SirenRepresentation, TransformerRegistry,
};
use std::fmt;
use std::sync::Arc;

/// Encoded body plus the content type describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    media_type: MediaType,
    charset: Charset,
    bytes: Vec<u8>,
}

impl RenderedBody {
    /// Returns the media type of the body.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Returns the charset of the body.
    #[must_use]
    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Returns the `Content-Type` header value.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!(
            "{}; charset={}",
            self.media_type.as_str(),
            self.charset.as_str()
        )
    }

    /// Borrows the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the body, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Picks an encoder for a request and renders payloads with it.
///
/// The encoder table is fixed once built; the negotiator is shared behind an
/// [`Arc`] by every request.
#[derive(Clone, Default)]
pub struct OutputNegotiator {
    encoders: Vec<Arc<dyn OutputEncoder>>,
}

impl OutputNegotiator {
    /// Creates a negotiator without encoders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            encoders: Vec::new(),
        }
    }

    /// Creates a negotiator with the Siren, HAL, plain JSON and problem
    /// encoders.
    #[must_use]
    pub fn standard() -> Self {
        let siren = TransformerRegistry::for_representation(SirenRepresentation);
        let hal = TransformerRegistry::for_representation(HalRepresentation);
        let plain = TransformerRegistry::for_representation(PlainRepresentation);

        Self::new()
            .with_encoder(RepresentationEncoder::new(MediaType::Siren, Arc::new(siren)))
            .with_encoder(RepresentationEncoder::new(MediaType::Hal, Arc::new(hal)))
            .with_encoder(RepresentationEncoder::new(MediaType::Json, Arc::new(plain)))
            .with_encoder(ProblemEncoder)
    }

    /// Adds an encoder, replacing any encoder for the same media type.
    #[must_use]
    pub fn with_encoder(mut self, encoder: impl OutputEncoder + 'static) -> Self {
        let media_type = encoder.media_type();
        self.encoders
            .retain(|existing| existing.media_type() != media_type);
        self.encoders.push(Arc::new(encoder));
        self
    }

    fn encoder(&self, media_type: MediaType) -> Option<&dyn OutputEncoder> {
        self.encoders
            .iter()
            .find(|encoder| encoder.media_type() == media_type)
            .map(|encoder| &**encoder)
    }

    /// Returns `true` when an encoder for `media_type` handles `kind`.
    #[must_use]
    pub fn can_encode(&self, media_type: MediaType, kind: PayloadKind) -> bool {
        self.encoder(media_type)
            .is_some_and(|encoder| encoder.can_encode(kind))
    }

    /// Selects the media type used to render a payload of `kind`.
    ///
    /// A format override wins over `Accept`. `Accept` entries are tried in
    /// the order listed; an absent or blank header selects plain JSON, or the
    /// problem encoder for problem payloads.
    ///
    /// # Errors
    ///
    /// Returns [`NegotiationError::UnsupportedMediaType`] when nothing the
    /// client asked for can represent the payload.
    pub fn select(
        &self,
        request: &FormatRequest,
        kind: PayloadKind,
    ) -> Result<MediaType, NegotiationError> {
        if let Some(format) = request.format_override() {
            return MediaType::from_format_override(format)
                .filter(|media_type| self.can_encode(*media_type, kind))
                .ok_or_else(|| unsupported(format, kind));
        }

        let Some(accept) = request.accept().filter(|value| !value.trim().is_empty()) else {
            return [MediaType::Json, MediaType::Problem]
                .into_iter()
                .find(|media_type| self.can_encode(*media_type, kind))
                .ok_or_else(|| unsupported("*/*", kind));
        };

        accept
            .split(',')
            .filter_map(MediaType::from_accept_entry)
            .find(|media_type| self.can_encode(*media_type, kind))
            .ok_or_else(|| unsupported(accept, kind))
    }

    /// Negotiates and renders a payload.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Negotiation`] when negotiation fails, or the
    /// encoder's error when rendering fails.
    pub fn render(
        &self,
        request: &FormatRequest,
        payload: &Payload<'_>,
    ) -> Result<RenderedBody, RenderError> {
        let media_type = self.select(request, payload.kind())?;
        self.render_as(media_type, payload, request.charset())
    }

    /// Renders a payload with the encoder for `media_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when no encoder is registered for the media
    /// type, the encoder does not handle the payload kind, or rendering
    /// fails.
    pub fn render_as(
        &self,
        media_type: MediaType,
        payload: &Payload<'_>,
        charset: Charset,
    ) -> Result<RenderedBody, RenderError> {
        let encoder = self
            .encoder(media_type)
            .ok_or_else(|| NegotiationError::UnsupportedMediaType(media_type.as_str().to_owned()))?;
        let kind = payload.kind();
        if !encoder.can_encode(kind) {
            return Err(RenderError::NotEncodable { media_type, kind });
        }
        let bytes = encoder.encode(payload, charset)?;
        Ok(RenderedBody {
            media_type,
            charset,
            bytes,
        })
    }

    /// Renders a problem document with the problem encoder.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when no problem encoder is registered or
    /// serialisation fails.
    pub fn render_problem(
        &self,
        problem: &ProblemDocument,
        charset: Charset,
    ) -> Result<RenderedBody, RenderError> {
        self.render_as(MediaType::Problem, &Payload::Problem(problem), charset)
    }
}

impl fmt::Debug for OutputNegotiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let media_types: Vec<MediaType> = self
            .encoders
            .iter()
            .map(|encoder| encoder.media_type())
            .collect();
        f.debug_struct("OutputNegotiator")
            .field("media_types", &media_types)
            .finish()
    }
}

fn unsupported(requested: &str, kind: PayloadKind) -> NegotiationError {
    tracing::debug!(requested, kind = %kind, "no encoder accepts the requested format");
    NegotiationError::UnsupportedMediaType(requested.trim().to_owned())
}
