//! Explicit config file source (`--config <FILE>`)

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use std::path::Path;

/// Add the config file to the builder. A file named explicitly must exist.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    config_path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !config_path.is_file() {
        return Err(ConfigError::NotFound(format!(
            "config file {}",
            config_path.display()
        )));
    }
    Ok(builder.add_source(File::from(config_path).format(FileFormat::Toml).required(true)))
}
