//! Output negotiation: choosing an encoder and producing body bytes.
//!
//! The media type table is static. View-models reach the wire through a
//! [`RepresentationEncoder`] and its transformer registry; problem documents
//! go through the [`ProblemEncoder`] and never touch a registry.

mod encoder;
mod error;
mod media_type;
mod negotiator;

pub use encoder::{OutputEncoder, Payload, PayloadKind, ProblemEncoder, RepresentationEncoder};
pub use error::{NegotiationError, RenderError};
pub use media_type::{Charset, FormatRequest, MediaType};
pub use negotiator::{OutputNegotiator, RenderedBody};
