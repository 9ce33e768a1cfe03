//! Shared world state for task API BDD scenarios.

use hypertodo::api::{ApiReply, InMemoryTodoResource};
use rstest::fixture;

/// Scenario world for task API behaviour tests.
#[derive(Default)]
pub struct ApiWorld {
    pub resource: Option<InMemoryTodoResource>,
    pub last_reply: Option<ApiReply>,
}

impl ApiWorld {
    /// Returns the resource built by a `Given` step.
    pub fn resource(&self) -> Result<&InMemoryTodoResource, eyre::Report> {
        self.resource
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task API in scenario world"))
    }

    /// Returns the reply recorded by a `When` step.
    pub fn reply(&self) -> Result<&ApiReply, eyre::Report> {
        self.last_reply
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing reply in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ApiWorld {
    ApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
