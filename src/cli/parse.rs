//! CLI parse: clap types for shemu. No behavior beyond mapping to `RawOverrides`.

use crate::config::RawOverrides;
use crate::logging::{LOG_FORMATS, LOG_LEVELS, LOG_OUTPUTS};
use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// shemu - UNIX command-line emulator
#[derive(Parser, Debug)]
#[command(name = "shemu")]
#[command(about = "UNIX command-line emulator")]
pub struct Cli {
    /// Physical location of the virtual file system
    #[arg(long)]
    pub vfs_path: Option<PathBuf>,

    /// Prompt shown before user input
    #[arg(long, allow_hyphen_values = true)]
    pub prompt: Option<String>,

    /// Script replayed at startup
    #[arg(long)]
    pub startup_script: Option<PathBuf>,

    /// INI configuration file; its [emulator] section overrides these flags
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Configuration summary format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level
    #[arg(long, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, value_parser = PossibleValuesParser::new(LOG_FORMATS))]
    pub log_format: Option<String>,

    /// Log output
    #[arg(long, value_parser = PossibleValuesParser::new(LOG_OUTPUTS))]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// How the resolved configuration is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl Cli {
    /// True when a flag chose where logs go.
    pub fn sets_log_destination(&self) -> bool {
        self.log_output.is_some() || self.log_file.is_some()
    }

    /// The four emulator flags as resolver input.
    pub fn overrides(&self) -> RawOverrides {
        RawOverrides {
            vfs_path: self.vfs_path.clone(),
            prompt: self.prompt.clone(),
            startup_script: self.startup_script.clone(),
            config_file: self.config_file.clone(),
        }
    }
}
