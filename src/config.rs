//! Runtime configuration for the task API.
//!
//! Configuration is a JSON document whose fields all have defaults, so an
//! empty object `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "base_url": "http://localhost:5000",
//!   "default_take": 2,
//!   "seed_count": 4
//! }
//! ```

use crate::hypermedia::domain::{Href, HypermediaDomainError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TAKE: usize = 2;
const DEFAULT_SEED_COUNT: usize = 4;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`ApiConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The base URL is not an absolute URI.
    #[error("invalid base_url: {0}")]
    InvalidBaseUrl(#[source] HypermediaDomainError),

    /// The default page size is zero.
    #[error("default_take must be greater than zero")]
    ZeroDefaultTake,
}

/// Settings for link generation, paging and start-up seeding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Absolute URL every generated link is rooted at.
    pub base_url: String,
    /// Page size used when a collection request carries no `take`.
    pub default_take: usize,
    /// Number of tasks the store is seeded with.
    pub seed_count: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            default_take: DEFAULT_TAKE,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl ApiConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or the error
    /// reported by [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let json = read_config_file(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute URI and [`ConfigError::ZeroDefaultTake`] when
    /// `default_take` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Href::parse(self.base_url.as_str()).map_err(ConfigError::InvalidBaseUrl)?;
        if self.default_take == 0 {
            return Err(ConfigError::ZeroDefaultTake);
        }
        Ok(())
    }
}

fn read_config_file(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("config path must include a file name"))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
