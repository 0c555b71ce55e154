//! Typed accessors over raw schema nodes.

use serde_json::{Map, Value};

/// Effective `type` of a schema node.
///
/// OpenAPI 3.1 allows a sequence (`type: [string, "null"]`); the first entry wins.
pub fn schema_type(node: &Value) -> Option<&str> {
    match node.get("type")? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(types) => types.first()?.as_str(),
        _ => None,
    }
}

/// The `properties` mapping of an object schema.
pub fn properties(node: &Value) -> Option<&Map<String, Value>> {
    node.get("properties")?.as_object()
}

/// A sequence-valued keyword, only when it has at least one entry.
pub fn non_empty_seq<'a>(node: &'a Value, key: &str) -> Option<&'a [Value]> {
    node.get(key)?
        .as_array()
        .filter(|seq| !seq.is_empty())
        .map(Vec::as_slice)
}

/// A numeric keyword (`minimum`, `multipleOf`, ...) as `f64`.
pub fn number(node: &Value, key: &str) -> Option<f64> {
    node.get(key)?.as_f64()
}

/// A non-negative count keyword (`minLength`, `maxItems`, ...).
pub fn count(node: &Value, key: &str) -> Option<usize> {
    node.get(key)?
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
}

/// Whether a keyword value counts as set.
///
/// `null`, `false`, `0` and `""` are unset; every other value is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `key` is present on `node` with a truthy value.
pub fn flag(node: &Value, key: &str) -> bool {
    node.get(key).is_some_and(is_truthy)
}
