//! CLI route: run context built from parsed arguments and loaded config.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, EditorConfig};
use crate::editor::{EditRequest, Editor};
use crate::error::EditError;
use tracing::info;

/// Runtime context for one invocation: the editor built from the effective config.
pub struct RunContext {
    editor: Editor,
    dry_run: bool,
}

impl RunContext {
    /// Create run context from the effective config.
    pub fn new(config: &EditorConfig, dry_run: bool) -> Result<Self, EditError> {
        let editor = Editor::from_config(config)?;
        Ok(Self { editor, dry_run })
    }

    /// Run the edit. Returns text for stdout: the edited document on a dry
    /// run, nothing otherwise.
    pub fn execute(&self, request: &EditRequest) -> Result<Option<String>, EditError> {
        if self.dry_run {
            let outcome = self.editor.apply(request)?;
            info!(
                path = %outcome.path.display(),
                applied = outcome.applied,
                "Dry run, file not written"
            );
            return Ok(Some(outcome.document.to_yaml_string()));
        }

        self.editor.run(request)?;
        Ok(None)
    }
}

/// Load config (file + environment), then apply CLI flags on top.
/// The merged result is validated again since flags bypass the loader.
pub fn load_config(cli: &Cli) -> Result<EditorConfig, EditError> {
    let loaded = ConfigLoader::load(cli.config.as_deref())?;
    let config = build_config(cli, loaded);
    config.validate().map_err(ConfigLoader::validation_error)?;
    Ok(config)
}

/// Apply CLI flags on top of the loaded config.
/// Precedence: CLI flags override environment override config file override defaults.
pub fn build_config(cli: &Cli, mut config: EditorConfig) -> EditorConfig {
    if let Some(ref workspace) = cli.workspace {
        config.workspace_root = Some(workspace.clone());
    }

    let logging = &mut config.logging;
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    config
}
