//! Edit requests: parsing the JSON edit list and applying items to a document.
//!
//! Items are validated one at a time as they are applied, so an invalid item
//! surfaces after every earlier item has already been applied in memory.
//! Callers that persist the document only after [`EditSet::apply`] returns
//! `Ok` never write a partially edited file.

mod path;

pub use path::{get_path, set_path, DottedPath, PathError};

use crate::document::MAX_NESTING_DEPTH;
use crate::error::EditError;
use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// A single validated edit
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub path: DottedPath,
    pub value: Value,
}

impl Edit {
    pub fn new(path: DottedPath, value: Value) -> Self {
        Self { path, value }
    }

    /// Validate the `index`-th element of the edits array.
    ///
    /// A missing `value` field is read as `null`. The edit is rejected when
    /// the document it produces would nest deeper than the loader accepts.
    pub fn from_json(index: usize, item: &JsonValue) -> Result<Self, EditError> {
        let object = item
            .as_object()
            .ok_or(EditError::EditNotObject { index })?;

        let raw_path = match object.get("path") {
            None | Some(JsonValue::Null) => return Err(EditError::MissingPath { index }),
            Some(JsonValue::String(raw)) if raw.is_empty() => {
                return Err(EditError::MissingPath { index })
            }
            Some(JsonValue::String(raw)) => raw,
            Some(_) => return Err(EditError::PathNotString { index }),
        };
        let path =
            DottedPath::parse(raw_path).map_err(|e| EditError::invalid_path(index, e))?;

        let value = match object.get("value") {
            Some(value) => json_to_yaml(value)?,
            None => Value::Null,
        };

        let depth = path.depth() + nesting_depth(&value);
        if depth > MAX_NESTING_DEPTH {
            return Err(EditError::TooDeep {
                index,
                depth,
                limit: MAX_NESTING_DEPTH,
            });
        }

        Ok(Self { path, value })
    }

    pub fn apply(&self, document: &mut Mapping) {
        set_path(document, &self.path, self.value.clone());
    }
}

/// The ordered, not yet validated, edit list of one request
#[derive(Debug, Clone, PartialEq)]
pub struct EditSet {
    items: Vec<JsonValue>,
}

impl EditSet {
    /// Parse the raw edits argument. Only the outer shape (a JSON array) is
    /// checked here; items are validated by [`EditSet::apply`].
    pub fn parse(raw: &str) -> Result<Self, EditError> {
        let parsed: JsonValue = serde_json::from_str(raw).map_err(EditError::InvalidEditsJson)?;
        match parsed {
            JsonValue::Array(items) => Ok(Self { items }),
            _ => Err(EditError::EditsNotArray),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and apply each item in order. Returns the number applied.
    pub fn apply(&self, document: &mut Mapping) -> Result<usize, EditError> {
        for (index, item) in self.items.iter().enumerate() {
            let edit = Edit::from_json(index, item)?;
            debug!(index, path = %edit.path, "Applying edit");
            edit.apply(document);
        }
        Ok(self.items.len())
    }
}

fn json_to_yaml(value: &JsonValue) -> Result<Value, EditError> {
    serde_yaml::to_value(value).map_err(EditError::Serialize)
}

/// Levels of sequences and mappings in `value`; zero for a scalar
fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(value, 0)];
    while let Some((value, depth)) = pending.pop() {
        match value {
            Value::Sequence(items) => {
                deepest = deepest.max(depth + 1);
                pending.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Mapping(mapping) => {
                deepest = deepest.max(depth + 1);
                for (key, value) in mapping {
                    pending.push((key, depth + 1));
                    pending.push((value, depth + 1));
                }
            }
            Value::Tagged(tagged) => pending.push((&tagged.value, depth)),
            _ => {}
        }
    }
    deepest
}
