//! RFC 7807 problem documents.

use super::HypermediaDomainError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Problem type reported when no specific type applies.
pub const DEFAULT_PROBLEM_TYPE: &str = "about:blank";

/// Problem type of the generic internal error document.
pub const INTERNAL_PROBLEM_TYPE: &str = "/docs/errors/internal";

const INTERNAL_TITLE: &str = "unable to process your request";
const INTERNAL_DETAIL: &str = "an error has occurred. it has been logged and will be investigated";
const VALIDATION_TITLE: &str = "one or more parameters are invalid";
const NOT_ACCEPTABLE_TITLE: &str = "the requested representation is not available";

/// Field name to messages map carried under `invalid-parameters`.
pub type InvalidParameters = BTreeMap<String, Vec<String>>;

/// Structured error body for HTTP APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDocument {
    status: u16,
    #[serde(rename = "type")]
    problem_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
    #[serde(
        rename = "invalid-parameters",
        skip_serializing_if = "Option::is_none"
    )]
    invalid_parameters: Option<InvalidParameters>,
}

impl ProblemDocument {
    /// Creates a problem document of type `about:blank`.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::InvalidStatus`] when `status` is not
    /// in `100..=599`.
    pub fn new(status: u16) -> Result<Self, HypermediaDomainError> {
        if !(100..=599).contains(&status) {
            return Err(HypermediaDomainError::InvalidStatus(status));
        }
        Ok(Self::with_status(status))
    }

    fn with_status(status: u16) -> Self {
        Self {
            status,
            problem_type: DEFAULT_PROBLEM_TYPE.to_owned(),
            title: None,
            detail: None,
            instance: None,
            invalid_parameters: None,
        }
    }

    /// Builds the generic 500 document that hides internal detail.
    #[must_use]
    pub fn internal() -> Self {
        Self::with_status(500)
            .with_type(INTERNAL_PROBLEM_TYPE)
            .with_title(INTERNAL_TITLE)
            .with_detail(INTERNAL_DETAIL)
    }

    /// Builds a 400 document listing the invalid parameters.
    #[must_use]
    pub fn invalid_parameters(violations: InvalidParameters) -> Self {
        let mut problem = Self::with_status(400).with_title(VALIDATION_TITLE);
        if !violations.is_empty() {
            problem.invalid_parameters = Some(violations);
        }
        problem
    }

    /// Builds a 406 document naming the rejected media type.
    #[must_use]
    pub fn not_acceptable(requested: &str) -> Self {
        Self::with_status(406)
            .with_title(NOT_ACCEPTABLE_TITLE)
            .with_detail(format!("no representation is available for '{requested}'"))
    }

    /// Sets the problem type URI reference.
    #[must_use]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = problem_type.into();
        self
    }

    /// Sets the summary; blank titles are ignored and others trimmed.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_blank(title.into()).map(|value| value.trim().to_owned());
        self
    }

    /// Sets the occurrence-specific explanation; blank values are ignored.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = non_blank(detail.into());
        self
    }

    /// Sets the occurrence URI reference.
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the problem type URI reference.
    #[must_use]
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the invalid parameter map, if any.
    #[must_use]
    pub const fn invalid_parameters_map(&self) -> Option<&InvalidParameters> {
        self.invalid_parameters.as_ref()
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
