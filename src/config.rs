//! Configuration System
//!
//! Layered configuration for the editor: built-in defaults, an optional TOML
//! file, then `YEDIT_*` environment variables, with `GITHUB_WORKSPACE` as the
//! last-resort workspace root. CLI flags are applied on top by the binary.
//!
//! Core logic never reads the environment; it receives an [`EditorConfig`].

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::GITHUB_WORKSPACE_ENV;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Directory every target file must stay underneath; unset means no check
    #[serde(default)]
    pub workspace_root: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
    Workspace(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Workspace(msg) => write!(f, "Workspace: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl EditorConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(root) = &self.workspace_root {
            if root.is_file() {
                errors.push(ValidationError::Workspace(format!(
                    "workspace root {} is a file, not a directory",
                    root.display()
                )));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "invalid format '{}' (must be 'json' or 'text')",
                self.logging.format
            )));
        }
        if !matches!(self.logging.output.as_str(), "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "invalid output '{}' (must be 'stderr' or 'file')",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
