//! Loading, selecting and rendering schema documents.
//!
//! Documents may be YAML or JSON. They are parsed with `serde_yaml_ng` and
//! converted to `serde_json::Value`, stringifying scalar mapping keys such as
//! unquoted response codes (`200:`).

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Number, Value};
use serde_yaml_ng::Value as Yaml;

use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// Parse a YAML or JSON document into a JSON value.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML, or if it contains a
/// mapping key that cannot become a JSON object key.
pub fn parse_document(input: &str) -> Result<Value> {
    let yaml: Yaml = serde_yaml_ng::from_str(input)?;
    into_json(yaml)
}

/// Read and parse a YAML or JSON document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Select the schema at `pointer` (JSON Pointer syntax), or the whole document.
///
/// # Errors
///
/// Returns [`Error::PointerNotFound`] if the pointer does not resolve.
pub fn select_schema<'a>(doc: &'a Value, pointer: Option<&str>) -> Result<&'a Value> {
    let Some(pointer) = pointer else {
        return Ok(doc);
    };
    doc.pointer(pointer).ok_or_else(|| Error::PointerNotFound {
        pointer: pointer.to_string(),
    })
}

/// Render a value as JSON (pretty or compact) or YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    Ok(rendered)
}

fn into_json(value: Yaml) -> Result<Value> {
    let json = match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(into_json).collect::<Result<_>>()?),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_string(key)?, into_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => into_json(tagged.value)?,
    };
    Ok(json)
}

fn yaml_number(n: &serde_yaml_ng::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        // `.nan` / `.inf` have no JSON representation
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key_string(key: Yaml) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Tagged(tagged) => key_string(tagged.value),
        other => Err(Error::UnsupportedKey {
            key: format!("{other:?}"),
        }),
    }
}
