//! CLI presentation: configuration summary, file-layer diagnostics, run epilogue.

use crate::cli::parse::SummaryFormat;
use crate::config::{EmulatorConfig, FileLayer};
use crate::error::{ConfigFileError, ShellError};
use std::path::PathBuf;

/// Printed once configuration and the startup script are done.
pub const READY_MESSAGE: &str = "Emulator is ready. Configuration loaded successfully.";

/// Printed when the startup script fails.
pub const FAILURE_MESSAGE: &str = "Shutting down due to a startup script error";

/// Prefix shared by every note about a configuration file that could not be used as written.
const FILE_ERROR_PREFIX: &str = "Error reading configuration file";

const SUMMARY_RULE_WIDTH: usize = 50;
const NOT_SET: &str = "(not set)";

pub fn format_config_summary(
    config: &EmulatorConfig,
    format: SummaryFormat,
) -> Result<String, ShellError> {
    match format {
        SummaryFormat::Text => Ok(format_config_summary_text(config)),
        SummaryFormat::Json => format_config_summary_json(config),
    }
}

/// Framed block listing every resolved field.
pub fn format_config_summary_text(config: &EmulatorConfig) -> String {
    let rule = "=".repeat(SUMMARY_RULE_WIDTH);
    let optional = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| NOT_SET.to_string())
    };

    let lines = [
        String::new(),
        rule.clone(),
        "EMULATOR CONFIGURATION".to_string(),
        rule.clone(),
        format!("VFS path: {}", config.vfs_path.display()),
        format!("Prompt: {}", config.prompt),
        format!("Startup script: {}", optional(&config.startup_script)),
        format!("Config file: {}", optional(&config.config_file)),
        rule,
    ];
    lines.join("\n")
}

pub fn format_config_summary_json(config: &EmulatorConfig) -> Result<String, ShellError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Human-readable note about the file layer, if it has something to say.
pub fn format_file_layer(layer: &FileLayer) -> Option<String> {
    match layer {
        FileLayer::Skipped(ConfigFileError::NotFound(path)) => Some(format!(
            "Warning: configuration file '{}' not found",
            path.display()
        )),
        FileLayer::Skipped(ConfigFileError::Parse { message, .. }) => {
            Some(format!("{}: {}", FILE_ERROR_PREFIX, message))
        }
        FileLayer::NotConfigured | FileLayer::Applied(_) | FileLayer::MissingSection => None,
    }
}

/// Note for a `[logging]` value that was replaced by its default.
pub fn format_logging_issue(issue: &str) -> String {
    format!("{}: {}", FILE_ERROR_PREFIX, issue)
}
