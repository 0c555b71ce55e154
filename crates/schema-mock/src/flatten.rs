//! Flatten a schema into a `path → attributes` map.
//!
//! Walks `properties` and `items` breadth-first with an explicit work queue,
//! so deeply nested schemas cannot overflow the stack. Paths follow one rule:
//!
//! - object nesting appends `.<key>`
//! - array nesting appends `.[0]`, one segment per array level; a single
//!   representative element describes every element
//!
//! An entry is recorded for every property reached (object or leaf), never for
//! the array element step itself. Entries keep the order they were visited
//! in: all properties of one level before any property of the next. Each entry projects the caller-selected
//! attributes from the property's own declared attributes, before any
//! composition keyword on it is resolved.

use std::borrow::Cow;
use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use schema_mock_core::node::{properties, schema_type};
use schema_mock_core::{composition, resolve};

/// Path segment standing in for the representative array element.
pub const ARRAY_SEGMENT: &str = "[0]";

/// One flattened field: its path plus the projected attributes.
///
/// Serializes flat, as `{ "path": ".a.b", "type": "string", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Dotted path of the field (e.g., `.select.[0].name`).
    pub path: String,

    /// Selected attributes copied from the field's schema node.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Flattened fields keyed by path, in breadth-first visiting order.
pub type PathMap = IndexMap<String, PathEntry>;

/// Path of property `key` under `base`.
#[must_use]
pub fn child_path(base: &str, key: &str) -> String {
    format!("{base}.{key}")
}

/// Path of the representative array element under `base`.
#[must_use]
pub fn element_path(base: &str) -> String {
    format!("{base}.{ARRAY_SEGMENT}")
}

/// What a queued node contributes when it is visited.
enum Step {
    /// Visit each of the node's `properties`.
    Properties,
    /// Descend into the node's `items` under an `[0]` segment.
    Element,
}

struct WorkItem<'a> {
    node: Cow<'a, Value>,
    base_path: String,
    step: Step,
}

/// Flatten `schema` into a map of field paths, projecting `attributes` from
/// each field's own schema node.
///
/// A root that resolves to neither an `object` with `properties` nor an
/// `array` with `items` produces an empty map. An attribute named `path` is
/// never projected; the entry's own path is authoritative.
pub fn flatten<S: AsRef<str>>(schema: &Value, attributes: &[S]) -> PathMap {
    let mut queue = VecDeque::new();
    let mut paths = PathMap::new();

    enqueue(&mut queue, resolve(schema), String::new());

    while let Some(item) = queue.pop_front() {
        match item.step {
            Step::Element => {
                if let Some(element) = into_items(item.node) {
                    enqueue(
                        &mut queue,
                        resolve_cow(element),
                        element_path(&item.base_path),
                    );
                }
            }
            Step::Properties => {
                for (key, child) in into_properties(item.node) {
                    let path = child_path(&item.base_path, &key);
                    let entry = PathEntry {
                        path: path.clone(),
                        attributes: project(&child, attributes),
                    };
                    paths.insert(path.clone(), entry);
                    enqueue(&mut queue, resolve_cow(child), path);
                }
            }
        }
    }

    tracing::debug!(entries = paths.len(), "flattened schema paths");
    paths
}

/// Queue `node` if it has children to visit.
fn enqueue<'a>(queue: &mut VecDeque<WorkItem<'a>>, node: Cow<'a, Value>, base_path: String) {
    let step = match schema_type(&node) {
        Some("object") if properties(&node).is_some() => Step::Properties,
        Some("array") if node.get("items").is_some_and(|items| !items.is_null()) => {
            Step::Element
        }
        _ => return,
    };
    queue.push_back(WorkItem {
        node,
        base_path,
        step,
    });
}

/// Resolve composition keywords, keeping borrowed nodes borrowed.
fn resolve_cow(node: Cow<'_, Value>) -> Cow<'_, Value> {
    match node {
        Cow::Borrowed(node) => resolve(node),
        Cow::Owned(node) if composition(&node).is_none() => Cow::Owned(node),
        Cow::Owned(node) => Cow::Owned(resolve(&node).into_owned()),
    }
}

/// Split a node into its `properties` entries, moving them out of owned nodes.
fn into_properties(node: Cow<'_, Value>) -> Vec<(String, Cow<'_, Value>)> {
    match node {
        Cow::Borrowed(node) => properties(node)
            .map(|props| {
                props
                    .iter()
                    .map(|(key, child)| (key.clone(), Cow::Borrowed(child)))
                    .collect()
            })
            .unwrap_or_default(),
        Cow::Owned(mut node) => match node.get_mut("properties").map(Value::take) {
            Some(Value::Object(props)) => props
                .into_iter()
                .map(|(key, child)| (key, Cow::Owned(child)))
                .collect(),
            _ => Vec::new(),
        },
    }
}

/// The `items` node, moved out of owned nodes.
fn into_items(node: Cow<'_, Value>) -> Option<Cow<'_, Value>> {
    match node {
        Cow::Borrowed(node) => node.get("items").map(Cow::Borrowed),
        Cow::Owned(mut node) => node.get_mut("items").map(Value::take).map(Cow::Owned),
    }
}

fn project<S: AsRef<str>>(node: &Value, attributes: &[S]) -> Map<String, Value> {
    attributes
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| *name != "path")
        .filter_map(|name| node.get(name).map(|value| (name.to_string(), value.clone())))
        .collect()
}
