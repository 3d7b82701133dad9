//! Error types for the shell emulator front end.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration file errors. Both variants are recovered by the resolver:
/// the file layer is skipped and command-line/default values stand.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read configuration file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConfigFileError {
    pub(crate) fn parse(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        ConfigFileError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Startup script errors. Fatal for the run.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read script '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Startup script failed: {}", .0.display())]
    StartupScriptFailed(PathBuf),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ShellError {
    fn from(err: config::ConfigError) -> Self {
        ShellError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::Output(err.to_string())
    }
}
