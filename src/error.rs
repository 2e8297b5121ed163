//! Error types for the YAML editor.

use crate::edit::PathError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating and applying an edit request
#[derive(Debug, Error)]
pub enum EditError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(
        "file path must be under workspace root {}: {}",
        root.display(),
        path.display()
    )]
    OutsideWorkspace { path: PathBuf, root: PathBuf },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid edits JSON: {0}")]
    InvalidEditsJson(#[source] serde_json::Error),

    #[error("edits must be a JSON array")]
    EditsNotArray,

    #[error("edit[{index}] must be an object with 'path' and 'value'")]
    EditNotObject { index: usize },

    #[error("edit[{index}] has missing or empty 'path'")]
    MissingPath { index: usize },

    #[error("edit[{index}] 'path' must be a string")]
    PathNotString { index: usize },

    #[error("edit[{index}]: {source}")]
    InvalidPath {
        index: usize,
        #[source]
        source: PathError,
    },

    #[error("edit[{index}] would nest {depth} levels deep; YAML documents are limited to {limit}")]
    TooDeep {
        index: usize,
        depth: usize,
        limit: usize,
    },

    #[error("error reading YAML {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading YAML {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("YAML root must be a mapping, found {0}")]
    RootNotMapping(&'static str),

    #[error("error serializing YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("error writing YAML {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for EditError {
    fn from(err: config::ConfigError) -> Self {
        EditError::Config(err.to_string())
    }
}

impl EditError {
    /// Attach an edit index to a path-level error
    pub fn invalid_path(index: usize, source: PathError) -> Self {
        EditError::InvalidPath { index, source }
    }
}
