//! When steps for task API BDD scenarios.

use super::world::{ApiWorld, run_async};
use hypertodo::api::CollectionQuery;
use hypertodo::hypermedia::negotiation::FormatRequest;
use hypertodo::todo::{domain::TodoId, services::TodoInput};
use rstest_bdd_macros::when;

#[when("the client requests the task collection")]
fn request_collection(world: &mut ApiWorld) -> Result<(), eyre::Report> {
    let reply = run_async(
        world
            .resource()?
            .get_collection(CollectionQuery::new(), &FormatRequest::new()),
    );
    world.last_reply = Some(reply);
    Ok(())
}

#[when(r#"the client creates a task "{description}" with importance "{important}" as "{format}""#)]
fn create_task(
    world: &mut ApiWorld,
    description: String,
    important: String,
    format: String,
) -> Result<(), eyre::Report> {
    let input = TodoInput::new()
        .with_description(description)
        .with_important(important);
    let request = FormatRequest::new().with_format_override(format);
    let reply = run_async(world.resource()?.create(&input, &request));
    world.last_reply = Some(reply);
    Ok(())
}

#[when("the client requests task {id:u64}")]
fn request_task(world: &mut ApiWorld, id: u64) -> Result<(), eyre::Report> {
    let reply = run_async(
        world
            .resource()?
            .get_one(TodoId::new(id), &FormatRequest::new()),
    );
    world.last_reply = Some(reply);
    Ok(())
}
