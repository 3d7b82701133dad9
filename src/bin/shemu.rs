//! Shemu CLI Binary
//!
//! Resolves the emulator configuration, prints it, replays the startup script,
//! and reports readiness.

use clap::Parser;
use shemu::cli::{format_logging_issue, map_error, Cli, RunContext, READY_MESSAGE};
use shemu::config::ini_file::{self, LoggingSection};
use shemu::logging::{init_logging, resolve_log_file_path};
use shemu::script::ConsoleSink;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging = build_logging_config(&cli);
    let mut notes: Vec<String> = logging
        .issues
        .iter()
        .map(|issue| format_logging_issue(issue))
        .collect();

    // Only a destination chosen on the command line makes a logging failure fatal.
    if let Err(e) = init_logging(Some(&logging.config)) {
        if cli.sets_log_destination() {
            println!("{}", map_error(&e));
            process::exit(1);
        }
        notes.push(map_error(&e));
    }

    info!("Shemu starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx.with_notes(notes),
        Err(e) => {
            error!("Error resolving configuration: {}", e);
            println!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.preamble() {
        Ok(preamble) => println!("{}", preamble),
        Err(e) => {
            error!("Failed to render configuration: {}", e);
            println!("{}", map_error(&e));
            process::exit(1);
        }
    }

    match context.run_startup_script(&mut ConsoleSink) {
        Ok(()) => {
            info!("Startup finished");
            println!("\n{}", READY_MESSAGE);
        }
        Err(e) => {
            error!("Startup failed: {}", e);
            println!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the config file's `[logging]` section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingSection {
    let LoggingSection { mut config, issues } = cli
        .config_file
        .as_deref()
        .map(ini_file::logging_section)
        .unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
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

    if config.enabled && config.output == "file" {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), config.file.clone()) {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    LoggingSection { config, issues }
}
