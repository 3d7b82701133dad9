//! Configuration System
//!
//! Resolves the emulator configuration from three layers: built-in defaults,
//! command-line overrides, and the `[emulator]` section of an optional INI file.
//! File values win over command-line values, which win over defaults. Problems
//! with the file never abort startup; they only mean the file layer is skipped.

use crate::error::{ConfigFileError, ShellError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

mod merge;
mod sources;

pub use merge::merge_policy::{
    apply_command_line_overrides, apply_file_overrides, default_configuration, DEFAULT_PROMPT,
    DEFAULT_VFS_DIR,
};
pub use sources::ini_file::{self, FileSection};

/// Resolved emulator configuration. Read-only once resolution finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmulatorConfig {
    /// Physical location of the virtual file system
    pub vfs_path: PathBuf,

    /// Prompt shown to the user
    pub prompt: String,

    /// Script replayed at startup, if any
    pub startup_script: Option<PathBuf>,

    /// INI file layered over the command line, if any
    pub config_file: Option<PathBuf>,
}

/// Raw values handed over by the command-line layer. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOverrides {
    pub vfs_path: Option<PathBuf>,
    pub prompt: Option<String>,
    pub startup_script: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// What the configuration file contributed to the resolved record.
#[derive(Debug)]
pub enum FileLayer {
    /// No `config_file` was given.
    NotConfigured,
    /// The `[emulator]` section was applied.
    Applied(FileSection),
    /// The file parsed but has no `[emulator]` section.
    MissingSection,
    /// The file could not be used; command-line/default values stand.
    Skipped(ConfigFileError),
}

/// Resolution result: the record plus a trace of the file layer for reporting.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: EmulatorConfig,
    pub file_layer: FileLayer,
}

/// Entry point for configuration resolution.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve against the process working directory.
    pub fn resolve_from_current_dir(overrides: &RawOverrides) -> Result<ResolvedConfig, ShellError> {
        let cwd = std::env::current_dir().map_err(|e| {
            ShellError::Config(format!("Failed to read current directory: {}", e))
        })?;
        Ok(Self::resolve(&cwd, overrides))
    }

    /// Resolve defaults for `cwd`, then command-line overrides, then the file layer.
    pub fn resolve(cwd: &Path, overrides: &RawOverrides) -> ResolvedConfig {
        let config = apply_command_line_overrides(default_configuration(cwd), overrides);

        let Some(config_path) = config.config_file.clone() else {
            return ResolvedConfig {
                config,
                file_layer: FileLayer::NotConfigured,
            };
        };

        match ini_file::load_emulator_section(&config_path) {
            Ok(Some(section)) => {
                debug!(config_path = %config_path.display(), ?section, "Applying [emulator] section");
                ResolvedConfig {
                    config: apply_file_overrides(config, &section),
                    file_layer: FileLayer::Applied(section),
                }
            }
            Ok(None) => {
                debug!(config_path = %config_path.display(), "No [emulator] section in configuration file");
                ResolvedConfig {
                    config,
                    file_layer: FileLayer::MissingSection,
                }
            }
            Err(err) => {
                match &err {
                    ConfigFileError::NotFound(_) => {
                        debug!(config_path = %config_path.display(), "Configuration file not found")
                    }
                    ConfigFileError::Parse { .. } => {
                        error!(config_path = %config_path.display(), error = %err, "Configuration file unreadable")
                    }
                }
                ResolvedConfig {
                    config,
                    file_layer: FileLayer::Skipped(err),
                }
            }
        }
    }
}
