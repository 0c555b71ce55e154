//! Composition keyword resolution.
//!
//! Collapses `allOf` / `oneOf` / `anyOf` into one concrete schema view.
//! Keywords are checked in the fixed order `allOf → oneOf → anyOf`, and
//! only the first one present (with at least one entry) is applied per step:
//!
//! - `allOf`: every entry is deep-merged, in order, into a clone of the
//!   composite node. Later entries win on conflicting scalar keys.
//! - `oneOf` / `anyOf`: the first entry is selected; all other entries and
//!   any sibling keywords of the composite node are discarded.
//!
//! Resolution never mutates the input document.

use std::borrow::Cow;

use serde_json::Value;

use crate::merge::merge_deep;
use crate::node::non_empty_seq;

/// The composition keyword that applies to a schema node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Composition<'a> {
    /// `allOf` with its (non-empty) entries.
    AllOf(&'a [Value]),
    /// First entry of a non-empty `oneOf`.
    OneOf(&'a Value),
    /// First entry of a non-empty `anyOf`.
    AnyOf(&'a Value),
}

impl Composition<'_> {
    /// The schema keyword this composition came from.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::AllOf(_) => "allOf",
            Self::OneOf(_) => "oneOf",
            Self::AnyOf(_) => "anyOf",
        }
    }
}

/// Determine which composition keyword, if any, applies to `schema`.
pub fn composition(schema: &Value) -> Option<Composition<'_>> {
    if let Some(parts) = non_empty_seq(schema, "allOf") {
        return Some(Composition::AllOf(parts));
    }
    if let Some(first) = non_empty_seq(schema, "oneOf").and_then(<[Value]>::first) {
        return Some(Composition::OneOf(first));
    }
    non_empty_seq(schema, "anyOf")
        .and_then(<[Value]>::first)
        .map(Composition::AnyOf)
}

/// Apply one resolution step to `schema`.
///
/// Returns the schema unchanged (borrowed) when it declares no composition
/// keyword, the selected branch (borrowed) for `oneOf` / `anyOf`, and a
/// freshly merged node (owned) for `allOf`.
pub fn normalize(schema: &Value) -> Cow<'_, Value> {
    match composition(schema) {
        Some(Composition::AllOf(parts)) => Cow::Owned(merge_all_of(schema, parts)),
        Some(Composition::OneOf(first) | Composition::AnyOf(first)) => Cow::Borrowed(first),
        None => Cow::Borrowed(schema),
    }
}

/// Resolve `schema` down to the node whose `type` should be inspected.
///
/// Follows `oneOf` / `anyOf` selections while the selected branch is itself
/// composite, and stops after an `allOf` merge.
pub fn resolve(schema: &Value) -> Cow<'_, Value> {
    let mut current = schema;
    loop {
        match composition(current) {
            Some(Composition::AllOf(parts)) => {
                tracing::trace!(entries = parts.len(), "merging allOf");
                return Cow::Owned(merge_all_of(current, parts));
            }
            Some(selected @ (Composition::OneOf(first) | Composition::AnyOf(first))) => {
                tracing::trace!(keyword = selected.keyword(), "selecting first branch");
                current = first;
            }
            None => return Cow::Borrowed(current),
        }
    }
}

/// Merge `parts` into a clone of `schema`, minus its own `allOf` key.
fn merge_all_of(schema: &Value, parts: &[Value]) -> Value {
    let mut merged = schema.clone();
    if let Some(map) = merged.as_object_mut() {
        map.shift_remove("allOf");
    }
    merge_deep(&mut merged, parts);
    merged
}
