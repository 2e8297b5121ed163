//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::EditError;

/// Render an error as the single diagnostic line printed to stderr.
pub fn map_error(e: &EditError) -> String {
    format!("Error: {}", e)
}

/// Convert a clap usage error into an [`EditError`], dropping clap's own
/// `error: ` prefix and trailing help hint.
pub fn usage_error(e: &clap::Error) -> EditError {
    let rendered = e.render().to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("For more information"))
        .map(|line| line.strip_prefix("error: ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ");
    EditError::InvalidArguments(message)
}
