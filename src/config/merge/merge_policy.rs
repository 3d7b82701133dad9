//! Merge rules: defaults, override order, conflict handling.
//!
//! Precedence, lowest to highest: defaults, command line, `[emulator]` file section.

use crate::config::sources::ini_file::FileSection;
use crate::config::{EmulatorConfig, RawOverrides};
use std::path::{Path, PathBuf};

/// Directory name of the virtual file system under the working directory.
pub const DEFAULT_VFS_DIR: &str = "vfs";

/// Prompt used when no source provides one.
pub const DEFAULT_PROMPT: &str = "> ";

/// Defaults for a run started in `cwd`.
pub fn default_configuration(cwd: &Path) -> EmulatorConfig {
    EmulatorConfig {
        vfs_path: cwd.join(DEFAULT_VFS_DIR),
        prompt: DEFAULT_PROMPT.to_string(),
        startup_script: None,
        config_file: None,
    }
}

/// First pass: command-line values replace defaults field by field.
pub fn apply_command_line_overrides(
    mut config: EmulatorConfig,
    overrides: &RawOverrides,
) -> EmulatorConfig {
    if let Some(vfs_path) = non_empty_path(overrides.vfs_path.as_deref()) {
        config.vfs_path = vfs_path;
    }
    if let Some(prompt) = non_empty(overrides.prompt.as_deref()) {
        config.prompt = prompt.to_string();
    }
    if let Some(script) = non_empty_path(overrides.startup_script.as_deref()) {
        config.startup_script = Some(script);
    }
    if let Some(config_file) = non_empty_path(overrides.config_file.as_deref()) {
        config.config_file = Some(config_file);
    }
    config
}

/// Second pass: file values replace whatever the first pass produced.
///
/// `config_file` is never touched. Empty `vfs_path` and `prompt` values are
/// skipped so both stay non-empty; an empty `startup_script` clears the script.
pub fn apply_file_overrides(mut config: EmulatorConfig, section: &FileSection) -> EmulatorConfig {
    if let Some(vfs_path) = non_empty(section.vfs_path.as_deref()) {
        config.vfs_path = PathBuf::from(vfs_path);
    }
    if let Some(prompt) = non_empty(section.prompt.as_deref()) {
        config.prompt = prompt.to_string();
    }
    if let Some(script) = section.startup_script.as_deref() {
        config.startup_script = non_empty(Some(script)).map(PathBuf::from);
    }
    config
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<&Path>) -> Option<PathBuf> {
    value
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
