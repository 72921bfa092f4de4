//! YAML text layer.
//!
//! Bridges between raw `.travis.yml` text and the ordered document model.
//! serde_yaml does the lexing and emission; this module enforces the shapes
//! the placement engine can edit: a mapping at the top level, string keys,
//! no tags.

use crate::core::document::{Mapping, Node, Scalar};
use crate::error::DocumentError;

/// Parse YAML text into an ordered document.
///
/// Empty, whitespace-only, and comments-only input all load as an empty
/// document rather than an error.
///
/// # Errors
///
/// Returns `DocumentError::Parse` for unparseable text, and the shape
/// variants when the document is valid YAML the placement engine cannot
/// safely edit.
pub fn decode(input: &str) -> Result<Mapping, DocumentError> {
    if input.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(input).map_err(DocumentError::Parse)?;

    match from_value(value)? {
        Node::Mapping(mapping) => Ok(mapping),
        Node::Scalar(Scalar::Null) => Ok(Mapping::new()),
        other => Err(DocumentError::TopLevelNotMapping {
            found: other.kind(),
        }),
    }
}

/// Render a document as block-style YAML with a trailing newline.
pub fn encode(document: &Mapping) -> Result<String, DocumentError> {
    let value = serde_yaml::Value::Mapping(to_yaml_mapping(document));
    serde_yaml::to_string(&value).map_err(DocumentError::Emit)
}

fn from_value(value: serde_yaml::Value) -> Result<Node, DocumentError> {
    match value {
        serde_yaml::Value::Null => Ok(Node::Scalar(Scalar::Null)),
        serde_yaml::Value::Bool(b) => Ok(Node::Scalar(Scalar::Bool(b))),
        serde_yaml::Value::Number(n) => Ok(Node::Scalar(number_to_scalar(&n))),
        serde_yaml::Value::String(s) => Ok(Node::Scalar(Scalar::Str(s))),
        serde_yaml::Value::Sequence(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                nodes.push(from_value(item)?);
            }
            Ok(Node::Sequence(nodes))
        }
        serde_yaml::Value::Mapping(entries) => {
            let mut mapping = Mapping::new();
            for (key, value) in entries {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    other => {
                        return Err(DocumentError::NonStringKey {
                            found: kind_of(&other),
                        })
                    }
                };
                mapping.insert(key, from_value(value)?);
            }
            Ok(Node::Mapping(mapping))
        }
        serde_yaml::Value::Tagged(tagged) => {
            Err(DocumentError::UnsupportedTag(tagged.tag.to_string()))
        }
    }
}

fn number_to_scalar(n: &serde_yaml::Number) -> Scalar {
    if let Some(int) = n.as_i64() {
        Scalar::Int(int)
    } else if let Some(int) = n.as_u64() {
        // Positive integers above i64::MAX; a float fallback would corrupt
        // the value on the next emit.
        Scalar::UInt(int)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(0.0))
    }
}

fn kind_of(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

fn to_value(node: &Node) -> serde_yaml::Value {
    match node {
        Node::Scalar(Scalar::Null) => serde_yaml::Value::Null,
        Node::Scalar(Scalar::Bool(b)) => serde_yaml::Value::Bool(*b),
        Node::Scalar(Scalar::Int(i)) => serde_yaml::Value::Number((*i).into()),
        Node::Scalar(Scalar::UInt(u)) => serde_yaml::Value::Number((*u).into()),
        Node::Scalar(Scalar::Float(f)) => serde_yaml::Value::Number((*f).into()),
        Node::Scalar(Scalar::Str(s)) => serde_yaml::Value::String(s.clone()),
        Node::Sequence(items) => serde_yaml::Value::Sequence(items.iter().map(to_value).collect()),
        Node::Mapping(mapping) => serde_yaml::Value::Mapping(to_yaml_mapping(mapping)),
    }
}

fn to_yaml_mapping(mapping: &Mapping) -> serde_yaml::Mapping {
    let mut out = serde_yaml::Mapping::new();
    for (key, value) in mapping.iter() {
        out.insert(serde_yaml::Value::String(key.to_string()), to_value(value));
    }
    out
}
