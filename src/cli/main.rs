//! Command-line interface entry point for `addi-mermaid`

mod args;
mod commands;

use addi_mermaid::config::Config;
use addi_mermaid::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use addi_mermaid::{debug, info};
use args::{Cli, Command};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);
    debug!("Parsed arguments: {args:?}");

    if let Some(Command::Config { subcommand }) = args.command {
        if let Err(e) = commands::config::run(subcommand, &mut config, &defaults) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let Some(csv_file) = args.csv_file.as_deref() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a CSV_FILE is required unless a subcommand is given",
            )
            .exit();
    };

    let fenced = args.fenced || config.output.fenced;
    commands::generate::run(csv_file, args.output.as_deref(), fenced);
}

/// Apply log level, debug, verbose and file logging from flags and config.
///
/// CLI flags win over config values; the level falls back to `warn`.
fn init_logging(args: &Cli, config: &Config) {
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if init_file_logging(log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!(
                "✗ Failed to initialize file logging at: {}",
                log_path.display()
            );
        }
    }
}
