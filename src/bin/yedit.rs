//! yedit CLI Binary
//!
//! Edits fields of a YAML file in place:
//! `yedit <FILE> '[{"path": "image.tag", "value": "v1.0"}]'`.
//! Exits 0 on success and 1 with an `Error:` diagnostic on stderr otherwise.

use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use tracing::{error, info};
use yedit::cli::{load_config, map_error, usage_error, Cli, RunContext};
use yedit::editor::EditRequest;
use yedit::error::EditError;
use yedit::logging::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => fail(&usage_error(&e)),
    };

    let config = load_config(&cli).unwrap_or_else(|e| fail(&e));

    // Initialize logging early
    if let Err(e) = init_logging(&config.logging) {
        fail(&e);
    }

    info!("yedit starting");

    let context = match RunContext::new(&config, cli.dry_run) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            fail(&e);
        }
    };

    let request = EditRequest::new(cli.file, cli.edits);
    match context.execute(&request) {
        Ok(output) => {
            info!("Edit completed successfully");
            if let Some(output) = output {
                print!("{}", output);
            }
        }
        Err(e) => {
            error!("Edit failed: {}", e);
            fail(&e);
        }
    }
}

fn fail(e: &EditError) -> ! {
    eprintln!("{}", map_error(e));
    process::exit(1);
}
