//! Config loader: assembles defaults, file, and environment into an EditorConfig.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, file};
use super::{EditorConfig, ValidationError};
use crate::error::EditError;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Loads [`EditorConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the process environment and an optional config file
    pub fn load(config_path: Option<&Path>) -> Result<EditorConfig, EditError> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_with_env(config_path, &vars)
    }

    /// Load using `vars` in place of the process environment
    pub fn load_with_env(
        config_path: Option<&Path>,
        vars: &HashMap<String, String>,
    ) -> Result<EditorConfig, EditError> {
        let mut builder = builder_with_defaults()?;
        if let Some(path) = config_path {
            builder = file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder, vars);

        let mut config: EditorConfig = builder.build()?.try_deserialize()?;

        config.workspace_root = config
            .workspace_root
            .filter(|root| !root.as_os_str().is_empty())
            .or_else(|| environment::github_workspace(vars));

        config.validate().map_err(Self::validation_error)?;

        debug!(
            workspace_root = ?config.workspace_root,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Fold validation failures into one configuration error
    pub fn validation_error(errors: Vec<ValidationError>) -> EditError {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        EditError::Config(format!(
            "Configuration validation failed: {}",
            error_msgs.join("; ")
        ))
    }
}
