//! URL resolution port supplied by the routing layer.

use crate::hypermedia::domain::{Href, HypermediaDomainError};
use std::fmt;
use thiserror::Error;

/// Named route the link builder can ask to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// A single task.
    GetOne,
    /// The task collection.
    GetCollection,
    /// Task creation.
    Create,
    /// Marking a task complete.
    Complete,
    /// Replacing a task's description and flag.
    Update,
    /// Task removal.
    Delete,
}

impl Route {
    /// Returns the route name used in diagnostics and route tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetOne => "get-one",
            Self::GetCollection => "get-collection",
            Self::Create => "create",
            Self::Complete => "complete",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered route parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter, replacing an earlier value with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let key = name.into();
        let rendered = value.to_string();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = rendered;
        } else {
            self.0.push((key, rendered));
        }
        self
    }

    /// Returns the value of a named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns `true` when no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Errors returned while resolving routes to absolute URIs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No template is registered for the route.
    #[error("no route registered for '{0}'")]
    UnknownRoute(Route),

    /// A template placeholder had no matching parameter.
    #[error("route '{route}' requires parameter '{parameter}'")]
    MissingParameter {
        /// Route being resolved.
        route: Route,
        /// Name of the missing parameter.
        parameter: String,
    },

    /// The resolved URI is not absolute.
    #[error("route '{route}' resolved to an invalid URI: {source}")]
    InvalidUri {
        /// Route being resolved.
        route: Route,
        /// Underlying validation failure.
        #[source]
        source: HypermediaDomainError,
    },
}

/// Resolves named routes to stable absolute URIs.
#[cfg_attr(test, mockall::automock)]
pub trait UrlResolver: Send + Sync {
    /// Resolves a route with its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] when the route is unknown, a parameter is
    /// missing, or the result is not an absolute URI.
    fn resolve(&self, route: Route, params: &RouteParams) -> Result<Href, RoutingError>;
}
