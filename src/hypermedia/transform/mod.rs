//! Transformation of view-models into format-specific trees.
//!
//! Each wire format implements [`Representation`]; a
//! [`TransformerRegistry`] per format dispatches on the view-model kind.
//! Adding a format means adding a representation and an encoder, nothing
//! in the view-models or the boundary layer changes.

pub mod hal;
pub mod plain;
pub mod registry;
pub mod siren;

use crate::hypermedia::domain::TodoViewModel;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub use hal::{HalEmbedded, HalLink, HalLinkEntry, HalLinks, HalRepresentation, HalResource};
pub use plain::{PlainNode, PlainRepresentation};
pub use registry::{Representation, TransformError, TransformFn, TransformerRegistry};
pub use siren::{SirenAction, SirenEntity, SirenField, SirenLink, SirenRepresentation};

/// Item state shared by the Siren and HAL representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoProperties {
    /// Task description.
    pub description: String,
    /// Completion timestamp; omitted while the task is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<DateTime<Utc>>,
    /// Importance flag.
    pub important: bool,
}

impl TodoProperties {
    /// Copies the state of an item view-model.
    #[must_use]
    pub fn from_item(item: &TodoViewModel) -> Self {
        Self {
            description: item.description().to_owned(),
            completed_on: item.completed_on(),
            important: item.important(),
        }
    }
}
