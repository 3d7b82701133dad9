//! CLI route: run context tying resolution, presentation, and script replay together.

use crate::cli::parse::{Cli, SummaryFormat};
use crate::cli::presentation::{format_config_summary, format_file_layer};
use crate::config::{ConfigResolver, RawOverrides, ResolvedConfig};
use crate::error::ShellError;
use crate::script::{ReportSink, ScriptRunner};
use std::path::Path;
use tracing::info;

/// Runtime context for one emulator run: the resolved configuration and how to present it.
pub struct RunContext {
    resolved: ResolvedConfig,
    summary_format: SummaryFormat,
    notes: Vec<String>,
}

impl RunContext {
    /// Resolve configuration from parsed CLI flags against the working directory.
    pub fn new(cli: &Cli) -> Result<Self, ShellError> {
        let resolved = ConfigResolver::resolve_from_current_dir(&cli.overrides())?;
        Ok(Self::from_resolved(resolved, cli.format))
    }

    /// Resolve configuration against an explicit working directory.
    pub fn with_cwd(cwd: &Path, overrides: &RawOverrides, summary_format: SummaryFormat) -> Self {
        Self::from_resolved(ConfigResolver::resolve(cwd, overrides), summary_format)
    }

    pub fn from_resolved(resolved: ResolvedConfig, summary_format: SummaryFormat) -> Self {
        info!(config = ?resolved.config, "Configuration resolved");
        Self {
            resolved,
            summary_format,
            notes: Vec::new(),
        }
    }

    /// Extra lines printed first in the preamble, such as rejected `[logging]` values.
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Text printed before any script output: extra notes, the file-layer note
    /// (if any), then the configuration summary.
    pub fn preamble(&self) -> Result<String, ShellError> {
        let summary = format_config_summary(&self.resolved.config, self.summary_format)?;
        let mut lines = self.notes.clone();
        lines.extend(format_file_layer(&self.resolved.file_layer));
        lines.push(summary);
        Ok(lines.join("\n"))
    }

    /// Replay the configured startup script, if any. A failed script becomes
    /// `ShellError::StartupScriptFailed`; no script at all is a success.
    pub fn run_startup_script<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<(), ShellError> {
        let config = &self.resolved.config;
        let Some(script) = config.startup_script.as_deref() else {
            info!("No startup script configured");
            return Ok(());
        };

        if ScriptRunner::new(script, &config.prompt).run(sink).is_success() {
            Ok(())
        } else {
            Err(ShellError::StartupScriptFailed(script.to_path_buf()))
        }
    }
}
