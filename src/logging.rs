//! Logging System
//!
//! Structured logging using the `tracing` crate. Logging is off unless enabled,
//! so that stderr only carries the `Error:` diagnostic in pipelines. When
//! enabled, events go to stderr or to a log file, as text or JSON.

use crate::error::EditError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive, e.g. `yedit=trace`
pub const LOG_FILTER_ENV: &str = "YEDIT_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit log events at all
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file"); defaults under the state directory
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stderr,
    File,
}

/// Initialize the global subscriber. A disabled config installs nothing.
pub fn init_logging(config: &LoggingConfig) -> Result<(), EditError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = parse_output(&config.output)?;

    let base_subscriber = Registry::default().with(filter);

    let get_file_writer = || -> Result<std::fs::File, EditError> {
        let log_file = resolve_log_file_path(config.file.clone())?;
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EditError::Config(format!("Failed to create log directory: {}", e))
            })?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| {
                EditError::Config(format!("Failed to open log file {:?}: {}", log_file, e))
            })
    };

    let installed = match (format, output) {
        (Format::Json, Output::File) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(get_file_writer()?),
            )
            .try_init(),
        (Format::Json, Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (Format::Text, Output::File) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(get_file_writer()?),
            )
            .try_init(),
        (Format::Text, Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| EditError::Config(format!("Failed to install logger: {}", e)))
}

/// Build the filter from `YEDIT_LOG` if set, otherwise from the config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, EditError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| EditError::Config(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

fn determine_format(config: &LoggingConfig) -> Result<Format, EditError> {
    match config.format.as_str() {
        "json" => Ok(Format::Json),
        "text" => Ok(Format::Text),
        other => Err(EditError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn parse_output(output: &str) -> Result<Output, EditError> {
    match output {
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(EditError::Config(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            output
        ))),
    }
}

/// Resolve the log file path: explicit path if given, else the default.
pub fn resolve_log_file_path(explicit: Option<PathBuf>) -> Result<PathBuf, EditError> {
    match explicit {
        Some(path) => Ok(path),
        None => default_log_file_path(),
    }
}

/// `<state_dir>/yedit.log`, falling back to the local data directory on
/// platforms without a state directory.
pub fn default_log_file_path() -> Result<PathBuf, EditError> {
    let dirs = directories::ProjectDirs::from("", "", "yedit").ok_or_else(|| {
        EditError::Config("Could not determine a home directory for the log file".to_string())
    })?;
    let base = dirs
        .state_dir()
        .unwrap_or_else(|| dirs.data_local_dir())
        .to_path_buf();
    Ok(base.join("yedit.log"))
}
