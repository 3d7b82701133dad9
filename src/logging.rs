//! Logging System
//!
//! Structured diagnostics using the `tracing` crate. Standard output carries the
//! emulator dialogue, so logs default to standard error.

use crate::error::ShellError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Accepted values for `level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted values for `format`.
pub const LOG_FORMATS: [&str; 2] = ["json", "text"];

/// Accepted values for `output`.
pub const LOG_OUTPUTS: [&str; 3] = ["stdout", "stderr", "file"];

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Turn logging off entirely
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
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
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Replace unusable values with their defaults.
    ///
    /// Returns one human-readable issue per replaced value.
    pub fn validated(mut self) -> (Self, Vec<String>) {
        let mut issues = Vec::new();
        replace_unknown("level", &mut self.level, &LOG_LEVELS, default_log_level(), &mut issues);
        replace_unknown("format", &mut self.format, &LOG_FORMATS, default_format(), &mut issues);
        replace_unknown("output", &mut self.output, &LOG_OUTPUTS, default_output(), &mut issues);

        self.modules.retain(|module, level| {
            let usable = format!("{}={}", module, level).parse::<Directive>().is_ok();
            if !usable {
                issues.push(format!("invalid [logging] module level '{}={}', ignored", module, level));
            }
            usable
        });

        (self, issues)
    }
}

fn replace_unknown(
    field: &str,
    value: &mut String,
    allowed: &[&str],
    default: String,
    issues: &mut Vec<String>,
) {
    if !allowed.contains(&value.as_str()) {
        issues.push(format!(
            "invalid [logging] {} '{}', using '{}'",
            field, value, default
        ));
        *value = default;
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (SHEMU_LOG, SHEMU_LOG_FORMAT, SHEMU_LOG_OUTPUT)
/// 2. CLI arguments and the `[logging]` config section, already folded into `config`
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ShellError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let installed = match (format.as_str(), output) {
        ("json", Output::File) => {
            let file_writer = open_log_file(config)?;
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(file_writer),
                )
                .try_init()
        }
        ("json", Output::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        ("json", Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (_, Output::File) => {
            let file_writer = open_log_file(config)?;
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .with_writer(file_writer),
                )
                .try_init()
        }
        (_, Output::Stdout) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        (_, Output::Stderr) => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| ShellError::Logging(format!("Failed to install subscriber: {}", e)))
}

/// Resolve the log file path: explicit CLI path, then configured path, then
/// `shemu.log` under the platform state directory.
pub fn resolve_log_file_path(
    cli_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<PathBuf, ShellError> {
    if let Some(path) = cli_path.or(config_path) {
        return Ok(path);
    }

    let dirs = directories::ProjectDirs::from("", "", "shemu").ok_or_else(|| {
        ShellError::Logging("Could not determine a home directory for the log file".to_string())
    })?;
    let base: &Path = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
    Ok(base.join("shemu.log"))
}

fn open_log_file(config: Option<&LoggingConfig>) -> Result<std::fs::File, ShellError> {
    let log_file = resolve_log_file_path(None, config.and_then(|c| c.file.clone()))?;

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ShellError::Logging(format!("Failed to create log directory: {}", e)))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ShellError::Logging(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ShellError> {
    if let Ok(filter) = EnvFilter::try_from_env("SHEMU_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ShellError::Logging(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    // Unusable entries in the environment are skipped, not fatal.
    if let Ok(modules_str) = std::env::var("SHEMU_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                if let Ok(directive) = directive.parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ShellError> {
    if let Ok(format) = std::env::var("SHEMU_LOG_FORMAT") {
        if LOG_FORMATS.contains(&format.as_str()) {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if !LOG_FORMATS.contains(&format) {
        return Err(ShellError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

fn determine_output(config: Option<&LoggingConfig>) -> Result<Output, ShellError> {
    if let Some(output) = std::env::var("SHEMU_LOG_OUTPUT")
        .ok()
        .and_then(|output| parse_output(&output).ok())
    {
        return Ok(output);
    }

    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output(output: &str) -> Result<Output, ShellError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(ShellError::Logging(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
