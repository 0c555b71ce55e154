//! Deterministic example values for schema nodes.
//!
//! Every node is resolved (composition keywords collapsed) before anything
//! else is inspected. Then, in order:
//!
//! 1. `example`, if present (even `null`), is returned verbatim.
//! 2. `default`, if present, is returned verbatim.
//! 3. `object` and `array` nodes are built recursively.
//! 4. A non-empty `enum` yields its first literal, whatever the `type`.
//! 5. Primitive types get a canonical value clamped into the declared
//!    constraints; unrecognized types yield `{}`.
//!
//! Contradictory constraints are not validated. The clamp arithmetic simply
//! produces whatever the bounds allow.

mod format;

use serde_json::{Map, Number, Value};

use schema_mock_core::node::{count, flag, non_empty_seq, number, properties, schema_type};
use schema_mock_core::resolve;

pub use format::{format_example, GENERIC_STRING};

/// Largest integer exactly representable in an IEEE 754 double.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Produce a representative value for `schema`.
///
/// Total over every input shape: malformed or partial schemas degrade to a
/// best-effort value instead of failing.
#[must_use]
pub fn synthesize(schema: &Value) -> Value {
    let node = resolve(schema);
    synthesize_resolved(&node)
}

fn synthesize_resolved(node: &Value) -> Value {
    if let Some(example) = node.get("example") {
        return example.clone();
    }
    if let Some(default) = node.get("default") {
        return default.clone();
    }

    let ty = schema_type(node);
    match ty {
        Some("object") => return synthesize_object(node),
        Some("array") => return synthesize_array(node),
        _ => {}
    }

    if let Some(first) = non_empty_seq(node, "enum").and_then(<[Value]>::first) {
        return first.clone();
    }

    match ty {
        Some("string") => synthesize_string(node),
        Some("number") => synthesize_number(node),
        Some("integer") => synthesize_integer(node),
        Some("null") => Value::Null,
        Some("boolean") => Value::Bool(true),
        _ => Value::Object(Map::new()),
    }
}

fn synthesize_object(node: &Value) -> Value {
    let Some(props) = properties(node) else {
        return Value::Object(Map::new());
    };
    Value::Object(
        props
            .iter()
            .map(|(key, child)| (key.clone(), synthesize(child)))
            .collect(),
    )
}

/// One element per `items.anyOf` branch, padded up to `minItems` (default 1)
/// with the `items.oneOf[0]`-or-`items` candidate, then cut to `maxItems`.
fn synthesize_array(node: &Value) -> Value {
    let Some(items) = node.get("items").filter(|items| !items.is_null()) else {
        return Value::Array(Vec::new());
    };

    let candidate = non_empty_seq(items, "oneOf")
        .and_then(<[Value]>::first)
        .unwrap_or(items);

    let mut elements: Vec<Value> = items
        .get("anyOf")
        .and_then(Value::as_array)
        .map(|branches| branches.iter().map(synthesize).collect())
        .unwrap_or_default();

    let min_items = count(node, "minItems").unwrap_or(1);
    if elements.len() < min_items {
        let fill = synthesize(candidate);
        elements.resize(min_items, fill);
    }

    if let Some(max_items) = count(node, "maxItems") {
        elements.truncate(max_items);
    }

    Value::Array(elements)
}

fn synthesize_string(node: &Value) -> Value {
    let example = node
        .get("format")
        .and_then(Value::as_str)
        .and_then(format_example);
    let is_generic = example.is_none();
    let mut value = example.map_or_else(|| GENERIC_STRING.to_string(), |e| e.into_owned());

    let min_len = count(node, "minLength").unwrap_or(0);
    if is_generic && value.chars().count() < min_len {
        value = value.chars().cycle().take(min_len).collect();
    }

    let len = value.chars().count();
    let max_len = count(node, "maxLength").unwrap_or(len);
    let target = len.max(min_len).min(max_len);
    if target < len {
        value = value.chars().take(target).collect();
    }
    Value::String(value)
}

fn synthesize_number(node: &Value) -> Value {
    let min = number(node, "minimum").unwrap_or(f64::MIN);
    let max = number(node, "maximum").unwrap_or(f64::MAX);
    json_number(nearest_to_zero(node, min, max))
}

fn synthesize_integer(node: &Value) -> Value {
    let min = integer_minimum(node).unwrap_or(-MAX_SAFE_INTEGER);
    let max = integer_maximum(node).unwrap_or(MAX_SAFE_INTEGER);
    json_number(nearest_to_zero(node, min, max))
}

/// `minimum`, shifted up by one when `exclusiveMinimum` is set.
fn integer_minimum(node: &Value) -> Option<f64> {
    let minimum = number(node, "minimum")?;
    Some(if flag(node, "exclusiveMinimum") {
        minimum + 1.0
    } else {
        minimum
    })
}

/// `maximum`, shifted down by one when `exclusiveMaximum` is set.
fn integer_maximum(node: &Value) -> Option<f64> {
    let maximum = number(node, "maximum")?;
    Some(if flag(node, "exclusiveMaximum") {
        maximum - 1.0
    } else {
        maximum
    })
}

/// Align the bounds to `multipleOf`, then clamp `0` into them.
fn nearest_to_zero(node: &Value, mut min: f64, mut max: f64) -> f64 {
    if let Some(step) = number(node, "multipleOf").filter(|step| *step != 0.0) {
        min = (min / step).ceil() * step;
        max = (max / step).floor() * step;
    }
    0.0_f64.max(min).min(max)
}

/// Integral values inside the safe range become JSON integers.
#[allow(clippy::cast_possible_truncation)]
fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::Number((n as i64).into());
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
