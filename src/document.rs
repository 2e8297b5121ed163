//! YAML document I/O
//!
//! A document is a single YAML mapping. Loading an empty file (or one holding
//! only comments or an explicit `null`) yields an empty mapping; any other
//! non-mapping root is rejected. Output is block style with keys in their
//! in-memory order and non-ASCII text written literally.

mod emit;

use crate::edit::{get_path, DottedPath};
use crate::error::EditError;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Mapping-rooted YAML document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

/// Deepest container nesting, root mapping included, that [`Document::load`]
/// accepts. `serde_yaml` refuses anything deeper.
pub const MAX_NESTING_DEPTH: usize = 128;

impl Document {
    /// Read and parse the document at `path`
    pub fn load(path: &Path) -> Result<Self, EditError> {
        let text = std::fs::read_to_string(path).map_err(|source| EditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Read YAML document");
        Self::parse(&text, path)
    }

    /// Parse YAML text; `origin` only labels errors
    pub fn parse(text: &str, origin: &Path) -> Result<Self, EditError> {
        let parse_error = |source| EditError::Parse {
            path: origin.to_path_buf(),
            source,
        };

        let mut documents = serde_yaml::Deserializer::from_str(text);
        let root = match documents.next() {
            Some(document) => Value::deserialize(document).map_err(parse_error)?,
            None => Value::Null,
        };
        if documents.next().is_some() {
            return Err(parse_error(serde::de::Error::custom(
                "expected a single YAML document, found more than one",
            )));
        }

        Self::from_value(root)
    }

    /// Wrap a parsed value, requiring a mapping (or null) at the root
    pub fn from_value(root: Value) -> Result<Self, EditError> {
        match root {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            other => Err(EditError::RootNotMapping(kind_name(&other))),
        }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }

    pub fn get(&self, path: &DottedPath) -> Option<&Value> {
        get_path(&self.root, path)
    }

    /// Block-style YAML text. Strings a YAML 1.1 reader would take for a
    /// boolean, number, null or date are single-quoted.
    pub fn to_yaml_string(&self) -> String {
        emit::to_string(&self.root)
    }

    /// Serialize, then overwrite the file at `path`
    pub fn save(&self, path: &Path) -> Result<(), EditError> {
        let text = self.to_yaml_string();
        std::fs::write(path, &text).map_err(|source| EditError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Wrote YAML document");
        Ok(())
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
