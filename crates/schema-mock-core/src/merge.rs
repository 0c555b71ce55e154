//! Recursive object merge.
//!
//! Object-valued keys are merged key-by-key; everything else (arrays,
//! strings, numbers, booleans, `null`) replaces the target value outright.
//! Sources are applied left to right, so later sources win.

use serde_json::{Map, Value};

use crate::node::is_truthy;

/// Merge every source into `target`, in order.
///
/// Non-object targets and non-object sources are skipped.
pub fn merge_deep<'a>(target: &mut Value, sources: impl IntoIterator<Item = &'a Value>) {
    for source in sources {
        merge_into(target, source);
    }
}

/// Merge a single `source` object into `target`.
///
/// When the source value at a key is an object, the merge recurses into the
/// target value at that key. An absent or unset (`null`, `false`, `0`, `""`)
/// target value is first replaced by an empty object; any other non-object
/// target value is left as is.
pub fn merge_into(target: &mut Value, source: &Value) {
    let (Some(target), Some(source)) = (target.as_object_mut(), source.as_object()) else {
        return;
    };

    for (key, value) in source {
        if value.is_object() {
            let slot = target.entry(key.clone()).or_insert(Value::Null);
            if !is_truthy(slot) {
                *slot = Value::Object(Map::new());
            }
            merge_into(slot, value);
        } else {
            target.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_objects_merge_key_by_key() {
        let mut target = json!({ "properties": { "a": { "type": "string" } } });
        merge_into(
            &mut target,
            &json!({ "properties": { "b": { "type": "integer" } } }),
        );
        assert_eq!(
            target,
            json!({
                "properties": {
                    "a": { "type": "string" },
                    "b": { "type": "integer" }
                }
            })
        );
    }

    #[test]
    fn arrays_replace_instead_of_concatenating() {
        let mut target = json!({ "enum": ["a", "b"], "required": ["x"] });
        merge_into(&mut target, &json!({ "enum": ["c"] }));
        assert_eq!(target, json!({ "enum": ["c"], "required": ["x"] }));
    }

    #[test]
    fn later_sources_win_on_scalars() {
        let mut target = json!({ "type": "string", "minLength": 1 });
        let first = json!({ "minLength": 2 });
        let second = json!({ "minLength": 3, "maxLength": 9 });
        merge_deep(&mut target, [&first, &second]);
        assert_eq!(
            target,
            json!({ "type": "string", "minLength": 3, "maxLength": 9 })
        );
    }

    #[test]
    fn object_source_fills_unset_target() {
        let mut target = json!({ "items": null, "xml": false, "extra": "" });
        let source = json!({
            "items": { "type": "string" },
            "xml": { "name": "n" },
            "extra": {}
        });
        merge_into(&mut target, &source);
        assert_eq!(
            target,
            json!({ "items": { "type": "string" }, "xml": { "name": "n" }, "extra": {} })
        );
    }

    #[test]
    fn object_source_leaves_set_scalar_target() {
        let mut target = json!({ "items": "bogus", "enum": ["a"] });
        merge_into(
            &mut target,
            &json!({ "items": { "type": "string" }, "enum": { "x": 1 } }),
        );
        assert_eq!(target, json!({ "items": "bogus", "enum": ["a"] }));
    }

    #[test]
    fn non_object_inputs_are_noops() {
        let mut target = json!(["a"]);
        merge_into(&mut target, &json!({ "type": "string" }));
        assert_eq!(target, json!(["a"]));

        let mut target = json!({ "type": "string" });
        merge_into(&mut target, &json!(42));
        assert_eq!(target, json!({ "type": "string" }));
    }

    #[test]
    fn source_is_not_modified() {
        let source = json!({ "properties": { "a": { "type": "string" } } });
        let mut target = json!({});
        merge_into(&mut target, &source);
        target["properties"]["a"]["type"] = json!("integer");
        assert_eq!(source["properties"]["a"]["type"], json!("string"));
    }
}
