//! CLI domain: parse, route, and output only.
//! No editing logic; the run context hands requests to the editor.

mod output;
mod parse;
mod route;

pub use output::{map_error, usage_error};
pub use parse::Cli;
pub use route::{build_config, load_config, RunContext};
