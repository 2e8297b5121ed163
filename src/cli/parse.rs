//! CLI parse: clap types for yedit. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// yedit - edit fields of a YAML file in place
#[derive(Debug, Parser)]
#[command(name = "yedit", version)]
#[command(about = "Edit fields of a YAML file in place using dotted key paths")]
pub struct Cli {
    /// YAML file to edit
    pub file: PathBuf,

    /// JSON array of edits, e.g. '[{"path": "image.tag", "value": "v1.0"}]'
    pub edits: String,

    /// Workspace root the file must stay under (overrides YEDIT_WORKSPACE_ROOT
    /// and GITHUB_WORKSPACE)
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the edited document to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
