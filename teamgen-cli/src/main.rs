//! `teamgen` CLI - Command-line interface for the cricket team generator
//!
//! Provides commands for managing a display-name session, building a roster
//! of players, keeping a saved player library, dividing the roster into two
//! balanced teams with a staggered reveal, and exporting the result.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use std::path::Path;

use clap::Parser;
use cli::Cli;
use teamgen_core::tracing::{TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    init_logging(config_path, cli.verbose, cli.quiet);

    let result = commands::dispatch(config_path, cli.quiet, cli.command);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Starts from the configured level and raises it once per `-v`
fn init_logging(config_path: Option<&Path>, verbose: u8, quiet: bool) {
    let logging = util::create_config_manager(config_path)
        .ok()
        .and_then(|manager| manager.load_settings().ok())
        .map(|settings| settings.logging)
        .unwrap_or_default();
    let level = if quiet {
        TracingLevel::Error
    } else {
        TracingLevel::raised_by(logging.tracing_level().unwrap_or_default(), verbose)
    };

    if let Err(e) = init_tracing(&logging.tracing_config(level)) {
        eprintln!("Warning: {e}");
    }
}
