//! Route-table URL resolver joining a base URL with path templates.

use crate::hypermedia::{
    domain::Href,
    ports::{Route, RouteParams, RoutingError, UrlResolver},
};
use std::collections::HashMap;

/// Resolves routes by substituting `{name}` placeholders in path templates.
///
/// Parameters without a placeholder are appended as a url-encoded query
/// string in insertion order.
#[derive(Debug, Clone)]
pub struct RouteTableResolver {
    base_url: String,
    templates: HashMap<Route, String>,
}

impl RouteTableResolver {
    /// Creates a resolver with no routes.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            base_url: raw.trim_end_matches('/').to_owned(),
            templates: HashMap::new(),
        }
    }

    /// Creates a resolver with the task API routes mounted at `/api/todos`.
    #[must_use]
    pub fn todo_routes(base_url: impl Into<String>) -> Self {
        Self::new(base_url)
            .with_route(Route::GetCollection, "/api/todos")
            .with_route(Route::Create, "/api/todos")
            .with_route(Route::GetOne, "/api/todos/{id}")
            .with_route(Route::Update, "/api/todos/{id}")
            .with_route(Route::Delete, "/api/todos/{id}")
            .with_route(Route::Complete, "/api/todos/{id}/complete")
    }

    /// Registers or replaces a path template.
    #[must_use]
    pub fn with_route(mut self, route: Route, template: impl Into<String>) -> Self {
        self.templates.insert(route, template.into());
        self
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl UrlResolver for RouteTableResolver {
    fn resolve(&self, route: Route, params: &RouteParams) -> Result<Href, RoutingError> {
        let template = self
            .templates
            .get(&route)
            .ok_or(RoutingError::UnknownRoute(route))?;

        let mut path = String::with_capacity(template.len());
        let mut consumed: Vec<&str> = Vec::new();
        let mut rest = template.as_str();
        while let Some((before, after_open)) = rest.split_once('{') {
            let (name, after_close) =
                after_open
                    .split_once('}')
                    .ok_or_else(|| RoutingError::MissingParameter {
                        route,
                        parameter: after_open.to_owned(),
                    })?;
            let value = params
                .get(name)
                .ok_or_else(|| RoutingError::MissingParameter {
                    route,
                    parameter: name.to_owned(),
                })?;
            path.push_str(before);
            path.push_str(&urlencoding::encode(value));
            consumed.push(name);
            rest = after_close;
        }
        path.push_str(rest);

        let query = params
            .iter()
            .filter(|(name, _)| !consumed.contains(name))
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        let mut uri = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            uri.push('?');
            uri.push_str(&query);
        }

        Href::parse(uri).map_err(|source| RoutingError::InvalidUri { route, source })
    }
}
