//! Confview CLI Binary
//!
//! Command-line interface for showing and completing configuration.

use clap::Parser;
use confview::cli::{Cli, RunContext};
use confview::config::ConfigLoader;
use confview::logging::{init_logging, LoggingConfig};
use std::io::Write;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Confview CLI starting");

    let context = match RunContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            eprintln!("{}", confview::cli::map_error(&e));
            process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = context.execute_to(&cli.command, &mut stdout);
    // Flush partial output before reporting an error.
    let flushed = stdout.flush();
    drop(stdout);

    if let Err(e) = result {
        error!("Command failed: {}", e);
        eprintln!("{}", confview::cli::map_error(&e));
        process::exit(1);
    }
    if let Err(e) = flushed {
        eprintln!("Failed to write output: {}", e);
        process::exit(1);
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
