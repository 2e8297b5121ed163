//! Dotted key paths and the nested setter

use serde_yaml::{Mapping, Value};
use std::fmt;
use thiserror::Error;

/// Path-level errors, raised before any document access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid empty path: {0:?}")]
    Empty(String),

    #[error("invalid path {0:?}: empty segment")]
    EmptySegment(String),
}

/// A validated, non-empty sequence of non-empty key segments.
///
/// Parsed from a string such as `image.tag`; surrounding whitespace is
/// trimmed before splitting on `.`. Segments themselves are kept verbatim,
/// so `" a . b"` addresses the keys `"a "` and `" b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    segments: Vec<String>,
}

impl DottedPath {
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty(raw.to_string()));
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment(raw.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    fn split_last(&self) -> (&String, &[String]) {
        // parse() guarantees at least one segment
        self.segments
            .split_last()
            .unwrap_or_else(|| unreachable!("dotted path without segments"))
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Set `value` at `path`, creating or replacing intermediate mappings.
///
/// Every intermediate level that is missing or holds a non-mapping value is
/// replaced by an empty mapping. The final key is overwritten whatever it
/// held; an existing key keeps its position in the mapping.
pub fn set_path(root: &mut Mapping, path: &DottedPath, value: Value) {
    let (last, parents) = path.split_last();

    let mut current = root;
    for segment in parents {
        let slot = current
            .entry(Value::String(segment.clone()))
            .or_insert(Value::Null);
        current = descend(slot);
    }

    current.insert(Value::String(last.clone()), value);
}

/// Look up the value at `path`, if every level along it is a mapping.
pub fn get_path<'a>(root: &'a Mapping, path: &DottedPath) -> Option<&'a Value> {
    let (last, parents) = path.split_last();

    let mut current = root;
    for segment in parents {
        current = current.get(segment.as_str())?.as_mapping()?;
    }
    current.get(last.as_str())
}

fn descend(slot: &mut Value) -> &mut Mapping {
    if !slot.is_mapping() {
        *slot = Value::Mapping(Mapping::new());
    }
    match slot {
        Value::Mapping(mapping) => mapping,
        _ => unreachable!("slot was just replaced with a mapping"),
    }
}
