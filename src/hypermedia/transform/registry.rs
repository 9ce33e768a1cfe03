//! Kind-keyed dispatch table from view-models to format trees.

use crate::hypermedia::domain::{
    Renderable, RenderableKind, TodoCollectionViewModel, TodoViewModel,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while transforming a view-model.
///
/// Both variants indicate a wiring defect, never bad client input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// No transformer is registered for the view-model kind.
    #[error("no {representation} transformer for {kind}")]
    NoTransformer {
        /// Representation the registry produces.
        representation: &'static str,
        /// Kind that had no registration.
        kind: RenderableKind,
    },

    /// A transformer registered for one kind was handed another.
    #[error("{representation} transformer expected {expected} but received {found}")]
    KindMismatch {
        /// Representation the registry produces.
        representation: &'static str,
        /// Kind the transformer was registered for.
        expected: RenderableKind,
        /// Kind it actually received.
        found: RenderableKind,
    },
}

/// Format-specific rendering of the two view-model kinds.
///
/// Collection rendering must reuse [`Representation::from_item`] for its
/// items so a collection never mixes representations.
pub trait Representation: Send + Sync + 'static {
    /// Tree produced by this representation.
    type Node;

    /// Returns the representation name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Renders a single item; `nested_rels` is set when the item is embedded
    /// in a collection.
    fn from_item(&self, item: &TodoViewModel, nested_rels: Option<&[&str]>) -> Self::Node;

    /// Renders a collection and its items.
    fn from_collection(&self, collection: &TodoCollectionViewModel) -> Self::Node;
}

/// Registered transform function.
pub type TransformFn<N> = Box<dyn Fn(&Renderable) -> Result<N, TransformError> + Send + Sync>;

/// Ordered `(kind, transform)` table for one representation.
///
/// The table is filled at start-up and then shared read-only, usually behind
/// an [`Arc`]; registration requires `&mut self`.
pub struct TransformerRegistry<N> {
    representation: &'static str,
    entries: Vec<(RenderableKind, TransformFn<N>)>,
}

impl<N> TransformerRegistry<N> {
    /// Creates an empty registry for the named representation.
    #[must_use]
    pub const fn new(representation: &'static str) -> Self {
        Self {
            representation,
            entries: Vec::new(),
        }
    }

    /// Registers a transformer for a kind.
    ///
    /// A later registration for the same kind replaces the earlier one in
    /// place and logs a warning.
    pub fn register<F>(&mut self, kind: RenderableKind, transform: F) -> &mut Self
    where
        F: Fn(&Renderable) -> Result<N, TransformError> + Send + Sync + 'static,
    {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == kind) {
            tracing::warn!(
                representation = self.representation,
                kind = %kind,
                "overriding existing transformer registration"
            );
            entry.1 = Box::new(transform);
        } else {
            self.entries.push((kind, Box::new(transform)));
        }
        self
    }

    /// Transforms a view-model with the first transformer registered for its
    /// kind.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NoTransformer`] when nothing is registered
    /// for the kind, or the error the transformer itself reports.
    pub fn transform(&self, view_model: &Renderable) -> Result<N, TransformError> {
        let kind = view_model.kind();
        let (_, transform) = self
            .entries
            .iter()
            .find(|(registered, _)| *registered == kind)
            .ok_or(TransformError::NoTransformer {
                representation: self.representation,
                kind,
            })?;
        transform(view_model)
    }

    /// Returns `true` when a transformer is registered for `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: RenderableKind) -> bool {
        self.entries.iter().any(|(registered, _)| *registered == kind)
    }

    /// Returns the representation name.
    #[must_use]
    pub const fn representation(&self) -> &'static str {
        self.representation
    }
}

impl<N: 'static> TransformerRegistry<N> {
    /// Creates a registry with the item and collection bridges of one
    /// representation.
    #[must_use]
    pub fn for_representation<R>(representation: R) -> Self
    where
        R: Representation<Node = N>,
    {
        let shared = Arc::new(representation);
        let name = shared.name();
        let mut registry = Self::new(name);

        let item_repr = Arc::clone(&shared);
        registry.register(RenderableKind::Item, move |view_model| match view_model {
            Renderable::Item(item) => Ok(item_repr.from_item(item, None)),
            Renderable::Collection(_) => Err(TransformError::KindMismatch {
                representation: name,
                expected: RenderableKind::Item,
                found: view_model.kind(),
            }),
        });

        let collection_repr = shared;
        registry.register(RenderableKind::Collection, move |view_model| match view_model {
            Renderable::Collection(collection) => Ok(collection_repr.from_collection(collection)),
            Renderable::Item(_) => Err(TransformError::KindMismatch {
                representation: name,
                expected: RenderableKind::Collection,
                found: view_model.kind(),
            }),
        });

        registry
    }
}

impl<N> fmt::Debug for TransformerRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<RenderableKind> = self.entries.iter().map(|(kind, _)| *kind).collect();
        f.debug_struct("TransformerRegistry")
            .field("representation", &self.representation)
            .field("kinds", &kinds)
            .finish()
    }
}
