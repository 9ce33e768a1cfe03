//! Task resource operations.
//!
//! Each operation negotiates the response format first, so a request for an
//! unsupported format never reaches the store.

use super::{ApiError, ApiReply, CollectionQuery, Responder};
use crate::config::{ApiConfig, ConfigError};
use crate::hypermedia::{
    adapters::RouteTableResolver,
    negotiation::{FormatRequest, OutputNegotiator, PayloadKind},
    ports::UrlResolver,
    services::{LinkBuildError, LinkBuilder},
};
use crate::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::TodoId,
    ports::{TodoStore, TodoStoreError},
    services::{TodoInput, TodoService},
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling a resource from configuration.
#[derive(Debug, Error)]
pub enum ResourceInitError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store could not be seeded.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
}

/// Boundary operations over the task collection.
pub struct TodoResource<S, C, U>
where
    S: TodoStore,
    C: Clock + Send + Sync,
    U: UrlResolver,
{
    service: TodoService<S, C>,
    links: LinkBuilder<U>,
    responder: Responder,
    default_take: usize,
}

/// Resource wired to the in-memory store, system clock and route table.
pub type InMemoryTodoResource = TodoResource<InMemoryTodoStore, DefaultClock, RouteTableResolver>;

impl InMemoryTodoResource {
    /// Builds a resource from configuration with a freshly seeded store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceInitError::Config`] when the configuration is
    /// invalid, or [`ResourceInitError::Store`] when seeding fails.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ResourceInitError> {
        config.validate()?;
        let store = InMemoryTodoStore::seeded(config.seed_count)?;
        let service = TodoService::new(Arc::new(store), Arc::new(DefaultClock));
        let links = LinkBuilder::new(Arc::new(RouteTableResolver::todo_routes(
            config.base_url.as_str(),
        )));
        let responder = Responder::new(Arc::new(OutputNegotiator::standard()));
        Ok(Self::new(service, links, responder, config.default_take))
    }
}

impl<S, C, U> TodoResource<S, C, U>
where
    S: TodoStore,
    C: Clock + Send + Sync,
    U: UrlResolver,
{
    /// Creates a resource from its collaborators.
    #[must_use]
    pub const fn new(
        service: TodoService<S, C>,
        links: LinkBuilder<U>,
        responder: Responder,
        default_take: usize,
    ) -> Self {
        Self {
            service,
            links,
            responder,
            default_take,
        }
    }

    /// `GET` a page of the collection.
    pub async fn get_collection(&self, query: CollectionQuery, format: &FormatRequest) -> ApiReply {
        self.try_get_collection(query, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_get_collection(
        &self,
        query: CollectionQuery,
        format: &FormatRequest,
    ) -> Result<ApiReply, ApiError> {
        let media_type = self.responder.negotiate(format, PayloadKind::Collection)?;
        let request = query.page_request(self.default_take)?;
        let page = self.service.page(request).await?;
        let pages = request.links_for(page.total);
        let view_model = self.links.collection(&page.items, &pages)?;
        self.responder
            .render(media_type, format.charset(), 200, &view_model.into())
    }

    /// `GET` a single task.
    pub async fn get_one(&self, id: TodoId, format: &FormatRequest) -> ApiReply {
        self.try_get_one(id, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_get_one(&self, id: TodoId, format: &FormatRequest) -> Result<ApiReply, ApiError> {
        let media_type = self.responder.negotiate(format, PayloadKind::Item)?;
        let todo = self.service.get(id).await?;
        let view_model = self.links.item(&todo)?;
        self.responder
            .render(media_type, format.charset(), 200, &view_model.into())
    }

    /// `POST` a new task; replies `201` with its `Location`.
    pub async fn create(&self, input: &TodoInput, format: &FormatRequest) -> ApiReply {
        self.try_create(input, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_create(
        &self,
        input: &TodoInput,
        format: &FormatRequest,
    ) -> Result<ApiReply, ApiError> {
        let media_type = self.responder.negotiate(format, PayloadKind::Item)?;
        let todo = self.service.create(input).await?;
        let view_model = self.links.item(&todo)?;
        let location = self.links.item_href(&todo).map_err(LinkBuildError::from)?;
        let reply = self
            .responder
            .render(media_type, format.charset(), 201, &view_model.into())?;
        Ok(reply.with_location(location))
    }

    /// `POST` to a task's `complete` action.
    pub async fn complete(&self, id: TodoId, format: &FormatRequest) -> ApiReply {
        self.try_complete(id, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_complete(&self, id: TodoId, format: &FormatRequest) -> Result<ApiReply, ApiError> {
        self.responder.negotiate(format, PayloadKind::Item)?;
        self.service.complete(id).await?;
        Ok(ApiReply::empty())
    }

    /// `PUT` new values onto a task.
    pub async fn update(&self, id: TodoId, input: &TodoInput, format: &FormatRequest) -> ApiReply {
        self.try_update(id, input, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_update(
        &self,
        id: TodoId,
        input: &TodoInput,
        format: &FormatRequest,
    ) -> Result<ApiReply, ApiError> {
        self.responder.negotiate(format, PayloadKind::Item)?;
        self.service.update(id, input).await?;
        Ok(ApiReply::empty())
    }

    /// `DELETE` a task.
    pub async fn delete(&self, id: TodoId, format: &FormatRequest) -> ApiReply {
        self.try_delete(id, format)
            .await
            .unwrap_or_else(|err| self.responder.failure(err, format.charset()))
    }

    async fn try_delete(&self, id: TodoId, format: &FormatRequest) -> Result<ApiReply, ApiError> {
        self.responder.negotiate(format, PayloadKind::Item)?;
        self.service.delete(id).await?;
        Ok(ApiReply::empty())
    }
}
