//! Then steps for task API BDD scenarios.

use super::world::ApiWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use serde_json::Value;

fn body_json(world: &ApiWorld) -> Result<Value, eyre::Report> {
    serde_json::from_slice(world.reply()?.body()).wrap_err("parse reply body as JSON")
}

#[then("the response status is {status:u16}")]
fn response_status(world: &mut ApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.reply()?.status();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the collection links are "{rels}""#)]
fn collection_links(world: &mut ApiWorld, rels: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = rels.split(',').map(str::trim).collect();
    let body = body_json(world)?;
    let actual: Vec<&str> = body["links"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("collection has no links array"))?
        .iter()
        .filter_map(|link| link["rel"][0].as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected links {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the location header is "{location}""#)]
fn location_header(world: &mut ApiWorld, location: String) -> Result<(), eyre::Report> {
    let actual = world.reply()?.location();
    if actual != Some(location.as_str()) {
        return Err(eyre::eyre!("expected location {location}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the Siren entity has class "{class}" and description "{description}""#)]
fn siren_entity(world: &mut ApiWorld, class: String, description: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if reply.content_type() != Some("application/vnd.siren+json; charset=utf-8") {
        return Err(eyre::eyre!(
            "expected a Siren body, found {:?}",
            reply.content_type()
        ));
    }
    let body = body_json(world)?;
    if body["class"] != serde_json::json!([class]) {
        return Err(eyre::eyre!("unexpected class {}", body["class"]));
    }
    if body["properties"]["description"] != description.as_str() {
        return Err(eyre::eyre!(
            "unexpected description {}",
            body["properties"]["description"]
        ));
    }
    let self_href = body["links"][0]["href"].as_str();
    if self_href != reply.location() {
        return Err(eyre::eyre!(
            "self link {self_href:?} does not match location {:?}",
            reply.location()
        ));
    }
    Ok(())
}

#[then(r#"the response body is "{text}""#)]
fn response_body(world: &mut ApiWorld, text: String) -> Result<(), eyre::Report> {
    let reply = world.reply()?;
    if reply.body_text() != Some(text.as_str()) {
        return Err(eyre::eyre!(
            "expected body {text:?}, found {:?}",
            reply.body_text()
        ));
    }
    if reply.content_type() != Some("text/plain; charset=utf-8") {
        return Err(eyre::eyre!(
            "expected a plain-text body, found {:?}",
            reply.content_type()
        ));
    }
    Ok(())
}

#[then(r#"the problem lists "{message}" for "{field}""#)]
fn problem_lists(world: &mut ApiWorld, message: String, field: String) -> Result<(), eyre::Report> {
    let body = body_json(world)?;
    let messages = body["invalid-parameters"][field.as_str()]
        .as_array()
        .ok_or_else(|| eyre::eyre!("problem has no messages for {field}"))?;
    if !messages.iter().any(|entry| entry.as_str() == Some(message.as_str())) {
        return Err(eyre::eyre!("message {message:?} not listed for {field}"));
    }
    Ok(())
}
