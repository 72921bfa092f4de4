//! Ordered document model.
//!
//! `.travis.yml` edits must not reorder what the user wrote, so mappings are
//! kept as an explicit list of pairs with a side index for lookup instead of
//! a hash or tree map. Updating an existing key rewrites the value in its
//! original slot; new keys are appended at the end.

use std::collections::HashMap;

/// A leaf value. Scalars are opaque to the placement logic.
///
/// Integers that fit `i64` parse as `Int`; larger positive values take the
/// `UInt` variant so they survive a reload unchanged instead of decaying to
/// a float approximation.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

/// One node of a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

impl Node {
    /// Shape word used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(Scalar::Null) => "null",
            Node::Scalar(Scalar::Bool(_)) => "a boolean",
            Node::Scalar(Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_)) => "a number",
            Node::Scalar(Scalar::Str(_)) => "a string",
            Node::Sequence(_) => "a sequence",
            Node::Mapping(_) => "a mapping",
        }
    }

    /// A string scalar node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::Str(value.into()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Node::Mapping(mapping)
    }
}

/// An insertion-ordered mapping with unique string keys.
///
/// The pair list is authoritative for order; the index only accelerates
/// lookup and always points at the live slot for its key.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
    index: HashMap<String, usize>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self.index.get(key) {
            Some(&slot) => Some(&mut self.entries[slot].1),
            None => None,
        }
    }

    /// Insert or overwrite `key`.
    ///
    /// An existing key keeps its position and gets the new value; a new key
    /// is appended at the end. Returns the previous value when overwriting.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Order-sensitive equality over the pair list; the index is derived state.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
