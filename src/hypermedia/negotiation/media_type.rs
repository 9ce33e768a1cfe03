//! Media types, charsets and the request-side negotiation inputs.

use std::fmt;

const SIREN: &str = "application/vnd.siren+json";
const HAL: &str = "application/hal+json";
const JSON: &str = "application/json";
const PROBLEM: &str = "application/problem+json";

/// Output media types the negotiator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `application/vnd.siren+json`.
    Siren,
    /// `application/hal+json`.
    Hal,
    /// `application/json`, the default.
    Json,
    /// `application/problem+json`, reserved for problem documents.
    Problem,
}

impl MediaType {
    /// Returns the media type string used in `Content-Type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Siren => SIREN,
            Self::Hal => HAL,
            Self::Json => JSON,
            Self::Problem => PROBLEM,
        }
    }

    /// Maps a `?format=` override onto a media type.
    ///
    /// Matching is case-insensitive after trimming.
    #[must_use]
    pub fn from_format_override(format: &str) -> Option<Self> {
        match format.trim().to_ascii_lowercase().as_str() {
            "siren" => Some(Self::Siren),
            "hal" => Some(Self::Hal),
            "json" => Some(Self::Json),
            "problem" => Some(Self::Problem),
            _ => None,
        }
    }

    /// Maps one `Accept` entry onto a media type.
    ///
    /// Parameters such as `q=` are ignored; `*/*` and `application/*` select
    /// plain JSON.
    #[must_use]
    pub fn from_accept_entry(entry: &str) -> Option<Self> {
        let essence = entry
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            SIREN => Some(Self::Siren),
            HAL => Some(Self::Hal),
            JSON | "*/*" | "application/*" => Some(Self::Json),
            PROBLEM => Some(Self::Problem),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text encoding of a rendered body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// UTF-16, little-endian without a byte order mark.
    Utf16,
}

impl Charset {
    /// Returns the charset label used in `Content-Type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }

    /// Picks a charset from an `Accept-Charset` header.
    ///
    /// UTF-16 is chosen when the header names `utf-16` or `unicode`;
    /// anything else, including an absent header, yields UTF-8.
    #[must_use]
    pub fn from_accept_charset(header: Option<&str>) -> Self {
        let wants_utf16 = header.is_some_and(|value| {
            value.split(',').any(|entry| {
                let name = entry
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase();
                name == "utf-16" || name == "unicode"
            })
        });
        if wants_utf16 { Self::Utf16 } else { Self::Utf8 }
    }

    /// Encodes serialised text in this charset.
    #[must_use]
    #[expect(
        clippy::little_endian_bytes,
        reason = "UTF-16 bodies are emitted little-endian regardless of host"
    )]
    pub fn encode(self, text: String) -> Vec<u8> {
        match self {
            Self::Utf8 => text.into_bytes(),
            Self::Utf16 => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

/// What the client asked for, as extracted by the boundary layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRequest {
    format_override: Option<String>,
    accept: Option<String>,
    accept_charset: Option<String>,
}

impl FormatRequest {
    /// Creates a request with no preferences, selecting plain UTF-8 JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit `?format=` override.
    #[must_use]
    pub fn with_format_override(mut self, format: impl Into<String>) -> Self {
        self.format_override = Some(format.into());
        self
    }

    /// Sets the `Accept` header value.
    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Sets the `Accept-Charset` header value.
    #[must_use]
    pub fn with_accept_charset(mut self, accept_charset: impl Into<String>) -> Self {
        self.accept_charset = Some(accept_charset.into());
        self
    }

    /// Returns the format override, if any.
    #[must_use]
    pub fn format_override(&self) -> Option<&str> {
        self.format_override.as_deref()
    }

    /// Returns the `Accept` header, if any.
    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// Returns the negotiated charset.
    #[must_use]
    pub fn charset(&self) -> Charset {
        Charset::from_accept_charset(self.accept_charset.as_deref())
    }
}
