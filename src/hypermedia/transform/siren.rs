//! Siren (`application/vnd.siren+json`) representation.

use super::{Representation, TodoProperties};
use crate::hypermedia::domain::{
    Action, Hypermedia, Link, TodoCollectionViewModel, TodoViewModel,
};
use serde::Serialize;

const ITEM_CLASS: &str = "todo";
const COLLECTION_CLASS: &str = "collection";
const NESTED_ITEM_RELS: &[&str] = &["item"];

/// Siren entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SirenEntity {
    /// Entity classes.
    pub class: Vec<String>,
    /// Relation to the parent entity; set only for embedded entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<Vec<String>>,
    /// Entity state; set only for items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<TodoProperties>,
    /// Embedded entities; set only for collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<SirenEntity>>,
    /// Navigational links.
    pub links: Vec<SirenLink>,
    /// Available actions.
    pub actions: Vec<SirenAction>,
}

/// Siren link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SirenLink {
    /// Link relations.
    pub rel: Vec<String>,
    /// Link target.
    pub href: String,
    /// Optional title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Siren action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SirenAction {
    /// Action name.
    pub name: String,
    /// Optional title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTTP verb.
    pub method: String,
    /// Action target.
    pub href: String,
    /// Media type of the submitted fields.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Input fields; omitted when the action takes none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SirenField>>,
}

/// Siren action field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SirenField {
    /// Field name.
    pub name: String,
    /// Input type.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Pre-filled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Field title.
    pub title: String,
}

/// Renders view-models as Siren entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct SirenRepresentation;

impl Representation for SirenRepresentation {
    type Node = SirenEntity;

    fn name(&self) -> &'static str {
        "Siren"
    }

    fn from_item(&self, item: &TodoViewModel, nested_rels: Option<&[&str]>) -> SirenEntity {
        SirenEntity {
            class: vec![ITEM_CLASS.to_owned()],
            rel: nested_rels.map(|rels| rels.iter().map(|rel| (*rel).to_owned()).collect()),
            properties: Some(TodoProperties::from_item(item)),
            entities: None,
            links: siren_links(item.links()),
            actions: siren_actions(item.actions()),
        }
    }

    fn from_collection(&self, collection: &TodoCollectionViewModel) -> SirenEntity {
        let entities = collection
            .items()
            .iter()
            .map(|item| self.from_item(item, Some(NESTED_ITEM_RELS)))
            .collect();

        SirenEntity {
            class: vec![COLLECTION_CLASS.to_owned()],
            rel: None,
            properties: None,
            entities: Some(entities),
            links: siren_links(collection.links()),
            actions: siren_actions(collection.actions()),
        }
    }
}

fn siren_links(links: &[Link]) -> Vec<SirenLink> {
    links
        .iter()
        .map(|link| SirenLink {
            rel: link.rel().to_vec(),
            href: link.href().as_str().to_owned(),
            title: link.title().map(ToOwned::to_owned),
        })
        .collect()
}

fn siren_actions(actions: &[Action]) -> Vec<SirenAction> {
    actions
        .iter()
        .map(|action| {
            let fields = (!action.fields().is_empty()).then(|| {
                action
                    .fields()
                    .iter()
                    .map(|field| SirenField {
                        name: field.name().to_owned(),
                        field_type: field.field_type().as_str().to_owned(),
                        value: field.value().map(ToOwned::to_owned),
                        title: field.title().to_owned(),
                    })
                    .collect()
            });

            SirenAction {
                name: action.name().to_owned(),
                title: action.title().map(ToOwned::to_owned),
                method: action.method().as_str().to_owned(),
                href: action.href().as_str().to_owned(),
                media_type: action.accepts().map(ToOwned::to_owned),
                fields,
            }
        })
        .collect()
}
