//! Environment source: `YEDIT_*` variables, plus the CI workspace fallback.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use std::collections::HashMap;
use std::path::PathBuf;

/// Prefix of editor variables, e.g. `YEDIT_WORKSPACE_ROOT`, `YEDIT_LOGGING__LEVEL`
const ENV_PREFIX: &str = "YEDIT";

/// Checkout directory set by GitHub Actions
pub const GITHUB_WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// Add the `YEDIT_*` variables from `vars` to the builder. Empty values are
/// treated as unset.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: &HashMap<String, String>,
) -> ConfigBuilder<DefaultState> {
    let source: config::Map<String, String> = vars
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(source)),
    )
}

/// Workspace root from `GITHUB_WORKSPACE`, if set and non-empty
pub fn github_workspace(vars: &HashMap<String, String>) -> Option<PathBuf> {
    vars.get(GITHUB_WORKSPACE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
