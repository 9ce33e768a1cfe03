//! HAL (`application/hal+json`) representation.

use super::{Representation, TodoProperties};
use crate::hypermedia::domain::{
    Action, Hypermedia, Link, TodoCollectionViewModel, TodoViewModel,
};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// HAL resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalResource {
    /// Resource state; `None` renders an attribute-less resource.
    #[serde(flatten)]
    pub properties: Option<TodoProperties>,
    /// Links keyed by relation.
    #[serde(rename = "_links")]
    pub links: HalLinks,
    /// Embedded resources; set only for collections.
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<HalEmbedded>,
}

/// Embedded resources of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalEmbedded {
    /// Embedded item resources in page order.
    pub items: Vec<HalResource>,
}

/// Single HAL link object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalLink {
    /// Link target.
    pub href: String,
    /// Optional title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTTP verb, set for links derived from actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Link plus the key it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalLinkEntry {
    /// Key under `_links`.
    pub rel: String,
    /// Link object.
    pub link: HalLink,
    /// Forces the key to render as an array.
    pub is_rel_array: bool,
}

/// Ordered `_links` entries.
///
/// Serialises as an object keyed by relation in first-appearance order. A
/// key renders as an array when it was used more than once or any of its
/// entries was flagged as a relation array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HalLinks(Vec<HalLinkEntry>);

impl HalLinks {
    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[HalLinkEntry] {
        &self.0
    }

    /// Returns every link filed under `rel`.
    #[must_use]
    pub fn get(&self, rel: &str) -> Vec<&HalLink> {
        self.0
            .iter()
            .filter(|entry| entry.rel == rel)
            .map(|entry| &entry.link)
            .collect()
    }

    fn push(&mut self, entry: HalLinkEntry) {
        self.0.push(entry);
    }

    fn grouped(&self) -> Vec<(&str, Vec<&HalLinkEntry>)> {
        let mut groups: Vec<(&str, Vec<&HalLinkEntry>)> = Vec::new();
        for entry in &self.0 {
            if let Some((_, members)) = groups.iter_mut().find(|(rel, _)| *rel == entry.rel) {
                members.push(entry);
            } else {
                groups.push((entry.rel.as_str(), vec![entry]));
            }
        }
        groups
    }
}

impl Serialize for HalLinks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let groups = self.grouped();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (rel, members) in &groups {
            match members.as_slice() {
                [single] if !single.is_rel_array => map.serialize_entry(rel, &single.link)?,
                many => {
                    let links: Vec<&HalLink> = many.iter().map(|entry| &entry.link).collect();
                    map.serialize_entry(rel, &links)?;
                }
            }
        }
        map.end()
    }
}

/// Renders view-models as HAL resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalRepresentation;

impl Representation for HalRepresentation {
    type Node = HalResource;

    fn name(&self) -> &'static str {
        "HAL"
    }

    fn from_item(&self, item: &TodoViewModel, _nested_rels: Option<&[&str]>) -> HalResource {
        HalResource {
            properties: Some(TodoProperties::from_item(item)),
            links: hal_links(item.links(), item.actions()),
            embedded: None,
        }
    }

    fn from_collection(&self, collection: &TodoCollectionViewModel) -> HalResource {
        let items = collection
            .items()
            .iter()
            .map(|item| self.from_item(item, None))
            .collect();

        HalResource {
            properties: None,
            links: hal_links(collection.links(), collection.actions()),
            embedded: Some(HalEmbedded { items }),
        }
    }
}

fn hal_links(links: &[Link], actions: &[Action]) -> HalLinks {
    let mut hal = HalLinks::default();
    for link in links {
        hal.push(HalLinkEntry {
            rel: link.primary_rel().to_owned(),
            link: HalLink {
                href: link.href().as_str().to_owned(),
                title: link.title().map(ToOwned::to_owned),
                method: None,
            },
            is_rel_array: link.rel().len() > 1,
        });
    }
    for action in actions {
        hal.push(HalLinkEntry {
            rel: action.name().to_owned(),
            link: HalLink {
                href: action.href().as_str().to_owned(),
                title: action.title().map(ToOwned::to_owned),
                method: Some(action.method().as_str().to_owned()),
            },
            is_rel_array: false,
        });
    }
    hal
}
