//! Conversion of results and failures into replies.

use super::ApiReply;
use crate::hypermedia::{
    domain::{InvalidParameters, PagingError, ProblemDocument, Renderable},
    negotiation::{
        Charset, FormatRequest, MediaType, NegotiationError, OutputNegotiator, PayloadKind,
        RenderError,
    },
    services::LinkBuildError,
};
use crate::todo::services::TodoServiceError;
use std::sync::Arc;
use thiserror::Error;

/// Plain-text body of every not-found reply.
pub const NOT_FOUND_MESSAGE: &str = "that task does not exist. it may have been removed";

const FALLBACK_MESSAGE: &str = "unable to process your request";

/// Failures a resource operation can end with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] TodoServiceError),

    /// The paging query is invalid.
    #[error(transparent)]
    Paging(#[from] PagingError),

    /// The requested format cannot represent the response.
    #[error(transparent)]
    Negotiation(#[from] NegotiationError),

    /// Links could not be attached to the view-model.
    #[error(transparent)]
    LinkBuild(#[from] LinkBuildError),

    /// The response body could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Renders view-models and maps failures onto status codes.
#[derive(Debug, Clone)]
pub struct Responder {
    negotiator: Arc<OutputNegotiator>,
}

impl Responder {
    /// Creates a responder backed by a negotiator.
    #[must_use]
    pub const fn new(negotiator: Arc<OutputNegotiator>) -> Self {
        Self { negotiator }
    }

    /// Selects the media type for a payload before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Negotiation`] when nothing the client asked for
    /// can represent the payload.
    pub fn negotiate(
        &self,
        request: &FormatRequest,
        kind: PayloadKind,
    ) -> Result<MediaType, ApiError> {
        Ok(self.negotiator.select(request, kind)?)
    }

    /// Renders a view-model with an already negotiated media type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Render`] when rendering fails.
    pub fn render(
        &self,
        media_type: MediaType,
        charset: Charset,
        status: u16,
        view_model: &Renderable,
    ) -> Result<ApiReply, ApiError> {
        let body = self
            .negotiator
            .render_as(media_type, &view_model.into(), charset)?;
        Ok(ApiReply::rendered(status, body))
    }

    /// Converts a failure into its reply.
    #[must_use]
    pub fn failure(&self, error: ApiError, charset: Charset) -> ApiReply {
        match error {
            ApiError::Service(TodoServiceError::NotFound(_)) => Self::not_found(),
            ApiError::Service(TodoServiceError::Input(input)) => {
                self.problem(&ProblemDocument::invalid_parameters(input.into_violations()), charset)
            }
            ApiError::Paging(paging) => self.invalid_paging(paging, charset),
            ApiError::Negotiation(negotiation)
            | ApiError::Render(RenderError::Negotiation(negotiation)) => {
                self.not_acceptable(&negotiation, charset)
            }
            other => self.internal(&other, charset),
        }
    }

    /// Builds the `404` reply.
    #[must_use]
    pub fn not_found() -> ApiReply {
        ApiReply::text(404, NOT_FOUND_MESSAGE)
    }

    fn invalid_paging(&self, error: PagingError, charset: Charset) -> ApiReply {
        let mut violations = InvalidParameters::new();
        violations.insert("take".to_owned(), vec![error.to_string()]);
        self.problem(&ProblemDocument::invalid_parameters(violations), charset)
    }

    fn not_acceptable(&self, error: &NegotiationError, charset: Charset) -> ApiReply {
        let NegotiationError::UnsupportedMediaType(requested) = error;
        tracing::debug!(requested = %requested, "responding 406");
        self.problem(&ProblemDocument::not_acceptable(requested), charset)
    }

    /// Logs an internal failure and builds the generic `500` reply.
    #[must_use]
    pub fn internal(&self, error: &dyn std::error::Error, charset: Charset) -> ApiReply {
        tracing::error!(error = %error, "request failed with an internal error");
        self.problem(&ProblemDocument::internal(), charset)
    }

    /// Renders a problem document as `application/problem+json`.
    ///
    /// Falls back to a plain-text `500` when the document cannot be
    /// rendered.
    #[must_use]
    pub fn problem(&self, problem: &ProblemDocument, charset: Charset) -> ApiReply {
        match self.negotiator.render_problem(problem, charset) {
            Ok(body) => ApiReply::rendered(problem.status(), body),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    status = problem.status(),
                    "failed to render problem document"
                );
                ApiReply::text(500, FALLBACK_MESSAGE)
            }
        }
    }
}
