//! State-transition actions and their form fields.

use super::{Href, HypermediaDomainError};
use serde::Serialize;
use std::fmt;

/// HTTP verb used to invoke an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Returns the canonical upper-case verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input control type of an action field, following the HTML5 input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// `hidden`
    Hidden,
    /// `text`
    Text,
    /// `search`
    Search,
    /// `tel`
    Tel,
    /// `url`
    Url,
    /// `email`
    Email,
    /// `password`
    Password,
    /// `datetime`
    Datetime,
    /// `date`
    Date,
    /// `month`
    Month,
    /// `week`
    Week,
    /// `time`
    Time,
    /// `datetime-local`
    #[serde(rename = "datetime-local")]
    DatetimeLocal,
    /// `number`
    Number,
    /// `range`
    Range,
    /// `color`
    Color,
    /// `checkbox`
    Checkbox,
    /// `radio`
    Radio,
    /// `file`
    File,
}

impl FieldType {
    /// Returns the wire name of the field type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Text => "text",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Email => "email",
            Self::Password => "password",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Month => "month",
            Self::Week => "week",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Number => "number",
            Self::Range => "range",
            Self::Color => "color",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::File => "file",
        }
    }
}

/// Form field accepted by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    title: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Field {
    /// Creates a field whose title defaults to its name.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::EmptyFieldName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
    ) -> Result<Self, HypermediaDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(HypermediaDomainError::EmptyFieldName);
        }
        Ok(Self {
            title: normalized.clone(),
            name: normalized,
            field_type,
            value: None,
        })
    }

    /// Overrides the default title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets a pre-filled value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the field type.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the pre-filled value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Available state transition on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    method: HttpMethod,
    href: Href,
    #[serde(skip_serializing_if = "Option::is_none")]
    accepts: Option<String>,
    fields: Vec<Field>,
}

impl Action {
    /// Creates an action without title, media type or fields.
    ///
    /// # Errors
    ///
    /// Returns [`HypermediaDomainError::EmptyActionName`] when `name` is
    /// blank.
    pub fn new(
        name: impl Into<String>,
        method: HttpMethod,
        href: Href,
    ) -> Result<Self, HypermediaDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(HypermediaDomainError::EmptyActionName);
        }
        Ok(Self {
            name: normalized,
            title: None,
            method,
            href,
            accepts: None,
            fields: Vec::new(),
        })
    }

    /// Sets a human-readable title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the media type the action accepts.
    #[must_use]
    pub fn with_accepts(mut self, media_type: impl Into<String>) -> Self {
        self.accepts = Some(media_type.into());
        self
    }

    /// Appends a field, keeping insertion order.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the action target.
    #[must_use]
    pub const fn href(&self) -> &Href {
        &self.href
    }

    /// Returns the accepted media type, if any.
    #[must_use]
    pub fn accepts(&self) -> Option<&str> {
        self.accepts.as_deref()
    }

    /// Returns the ordered fields.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
