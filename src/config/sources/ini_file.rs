//! INI config file source: the `[emulator]` and `[logging]` sections of `--config-file`.
//!
//! Values are taken as written: no backslash escapes, no quote stripping. Section
//! names compare exactly; keys do not.

use crate::error::ConfigFileError;
use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Map, Source, Value, ValueKind};
use ini::{Ini, ParseOption};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Section name holding emulator overrides.
pub const EMULATOR_SECTION: &str = "emulator";

/// Section name holding logging settings.
pub const LOGGING_SECTION: &str = "logging";

/// Values read from the `[emulator]` section. Every key is optional; `config_file`
/// is deliberately absent since the file cannot redirect itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileSection {
    #[serde(default)]
    pub vfs_path: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub startup_script: Option<String>,
}

/// `[logging]` settings plus a note for every value replaced by its default.
#[derive(Debug, Default)]
pub struct LoggingSection {
    pub config: LoggingConfig,
    pub issues: Vec<String>,
}

/// Parsed INI text, fed to a `ConfigBuilder` as a source.
///
/// Keys before the first section header, repeated sections and repeated keys
/// are rejected. Only the sections this module reads are kept.
#[derive(Debug, Clone)]
pub struct IniDocument {
    sections: Map<String, Value>,
}

impl IniDocument {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigFileError> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
        };
        let ini = Ini::load_from_str_opt(text, options)
            .map_err(|e| ConfigFileError::parse(path, e))?;

        if let Some((key, _)) = ini
            .section(None::<String>)
            .and_then(|general| general.iter().next())
        {
            return Err(ConfigFileError::parse(
                path,
                format!("key '{}' appears before any section header", key),
            ));
        }

        let origin = path.display().to_string();
        let mut seen = HashSet::new();
        let mut sections = Map::new();
        for (name, properties) in ini.iter() {
            let Some(name) = name else { continue };
            if !seen.insert(name) {
                return Err(ConfigFileError::parse(
                    path,
                    format!("section [{}] appears more than once", name),
                ));
            }
            if name != EMULATOR_SECTION && name != LOGGING_SECTION {
                continue;
            }

            let mut table = Map::new();
            for (key, value) in properties.iter() {
                let key = key.to_lowercase();
                if table.contains_key(&key) {
                    return Err(ConfigFileError::parse(
                        path,
                        format!("key '{}' appears more than once in [{}]", key, name),
                    ));
                }
                table.insert(
                    key,
                    Value::new(Some(&origin), ValueKind::String(value.to_string())),
                );
            }
            sections.insert(
                name.to_string(),
                Value::new(Some(&origin), ValueKind::Table(table)),
            );
        }

        Ok(Self { sections })
    }
}

impl Source for IniDocument {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(self.sections.clone())
    }
}

/// Parse the INI file at `path` into a `Config` tree.
///
/// Missing files are reported as `NotFound` before parsing is attempted, so the
/// caller can tell a warning (missing) from an error (unreadable or malformed).
pub fn load(path: &Path) -> Result<Config, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigFileError::parse(path, e))?;
    Config::builder()
        .add_source(IniDocument::parse(path, &text)?)
        .build()
        .map_err(|e| ConfigFileError::parse(path, e))
}

/// Read the `[emulator]` section. `Ok(None)` when the file has no such section.
pub fn emulator_section(
    settings: &Config,
    path: &Path,
) -> Result<Option<FileSection>, ConfigFileError> {
    optional_section(settings, EMULATOR_SECTION).map_err(|e| ConfigFileError::parse(path, e))
}

/// Load the file and return its `[emulator]` section in one step.
pub fn load_emulator_section(path: &Path) -> Result<Option<FileSection>, ConfigFileError> {
    let settings = load(path)?;
    emulator_section(&settings, path)
}

/// Read the `[logging]` section without logging anything.
///
/// Used before logging is initialized. A missing or malformed file yields the
/// defaults with no issues, since the resolver reports it later. Values that
/// cannot be used fall back to their defaults and are listed in `issues`.
pub fn logging_section(path: &Path) -> LoggingSection {
    let Ok(settings) = load(path) else {
        return LoggingSection::default();
    };

    match optional_section::<LoggingConfig>(&settings, LOGGING_SECTION) {
        Ok(Some(config)) => {
            let (config, issues) = config.validated();
            LoggingSection { config, issues }
        }
        Ok(None) => LoggingSection::default(),
        Err(e) => LoggingSection {
            config: LoggingConfig::default(),
            issues: vec![format!("[{}] section ignored: {}", LOGGING_SECTION, e)],
        },
    }
}

fn optional_section<T>(settings: &Config, key: &str) -> Result<Option<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    match settings.get::<T>(key) {
        Ok(section) => Ok(Some(section)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
