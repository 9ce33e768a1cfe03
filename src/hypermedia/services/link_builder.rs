//! Attaches navigation links and state-transition actions to view-models.
//!
//! Ordering is part of the contract clients rely on: items carry links
//! `[self, collection]` and actions `[complete, delete]`; collections carry
//! links `[previous?, next?, self]` and the action `[create]`.

use crate::hypermedia::{
    domain::{
        Action, Field, FieldType, HttpMethod, Hypermedia, HypermediaDomainError, Link,
        PagingDescriptor, TodoCollectionViewModel, TodoViewModel,
    },
    ports::{Route, RouteParams, RoutingError, UrlResolver},
};
use crate::todo::domain::Todo;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while enriching a view-model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkBuildError {
    /// A route could not be resolved.
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// A link or action could not be constructed.
    #[error(transparent)]
    Domain(#[from] HypermediaDomainError),
}

/// Builds hypermedia controls from a URL-resolution capability.
#[derive(Debug)]
pub struct LinkBuilder<U>
where
    U: UrlResolver,
{
    resolver: Arc<U>,
}

impl<U> Clone for LinkBuilder<U>
where
    U: UrlResolver,
{
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
        }
    }
}

impl<U> LinkBuilder<U>
where
    U: UrlResolver,
{
    /// Creates a link builder.
    #[must_use]
    pub const fn new(resolver: Arc<U>) -> Self {
        Self { resolver }
    }

    /// Maps a task to a view-model carrying its links and actions.
    ///
    /// # Errors
    ///
    /// Returns [`LinkBuildError`] when a route cannot be resolved.
    pub fn item(&self, todo: &Todo) -> Result<TodoViewModel, LinkBuildError> {
        let mut view_model = TodoViewModel::from_todo(todo);
        let by_id = RouteParams::new().with("id", todo.id());

        let self_href = self.resolver.resolve(Route::GetOne, &by_id)?;
        view_model.push_link(Link::new("self", self_href)?);
        let collection_href = self
            .resolver
            .resolve(Route::GetCollection, &RouteParams::new())?;
        view_model.push_link(Link::new("collection", collection_href)?);

        let complete_href = self.resolver.resolve(Route::Complete, &by_id)?;
        view_model.push_action(
            Action::new("complete", HttpMethod::Post, complete_href)?.with_title("mark complete"),
        );
        let delete_href = self.resolver.resolve(Route::Delete, &by_id)?;
        view_model
            .push_action(Action::new("delete", HttpMethod::Delete, delete_href)?.with_title("delete"));

        Ok(view_model)
    }

    /// Maps a page of tasks to a collection view-model.
    ///
    /// Each item is enriched with [`Self::item`]; `pages` becomes one link
    /// per descriptor, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`LinkBuildError`] when a route cannot be resolved.
    pub fn collection(
        &self,
        todos: &[Todo],
        pages: &[PagingDescriptor],
    ) -> Result<TodoCollectionViewModel, LinkBuildError> {
        let items = todos
            .iter()
            .map(|todo| self.item(todo))
            .collect::<Result<Vec<_>, _>>()?;
        let mut collection = TodoCollectionViewModel::new(items);

        for page in pages {
            let params = RouteParams::new()
                .with("skip", page.offset)
                .with("take", page.page_size);
            let href = self.resolver.resolve(Route::GetCollection, &params)?;
            collection.push_link(Link::new(page.direction.as_rel(), href)?);
        }

        let create_href = self.resolver.resolve(Route::Create, &RouteParams::new())?;
        collection.push_action(
            Action::new("create", HttpMethod::Post, create_href)?
                .with_title("new task")
                .with_field(Field::new("description", FieldType::Text)?)
                .with_field(Field::new("important", FieldType::Text)?),
        );

        Ok(collection)
    }

    /// Resolves the canonical URI of a task, used for `Location` headers.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] when the route cannot be resolved.
    pub fn item_href(&self, todo: &Todo) -> Result<String, RoutingError> {
        let params = RouteParams::new().with("id", todo.id());
        Ok(self
            .resolver
            .resolve(Route::GetOne, &params)?
            .as_str()
            .to_owned())
    }
}
