//! Property-based tests for configuration precedence

use proptest::prelude::*;
use shemu::config::{
    apply_command_line_overrides, apply_file_overrides, default_configuration, ConfigResolver,
    FileSection, RawOverrides,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9/_.>$-]{1,24}")
}

/// Without a config file, each field is the override when present, else the default.
#[test]
fn test_command_line_layer_is_field_wise() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let cwd = Path::new("/work");

    runner
        .run(
            &(value(), value(), value(), value()),
            |(vfs_path, prompt, startup_script, config_file)| {
                let overrides = RawOverrides {
                    vfs_path: vfs_path.clone().map(PathBuf::from),
                    prompt: prompt.clone(),
                    startup_script: startup_script.clone().map(PathBuf::from),
                    config_file: config_file.clone().map(PathBuf::from),
                };
                let defaults = default_configuration(cwd);
                let config = apply_command_line_overrides(defaults.clone(), &overrides);

                prop_assert_eq!(
                    config.vfs_path,
                    vfs_path.map(PathBuf::from).unwrap_or(defaults.vfs_path)
                );
                prop_assert_eq!(config.prompt, prompt.unwrap_or(defaults.prompt));
                prop_assert_eq!(config.startup_script, startup_script.map(PathBuf::from));
                prop_assert_eq!(config.config_file, config_file.map(PathBuf::from));
                Ok(())
            },
        )
        .unwrap();
}

/// File values beat command-line values; absent file keys leave them alone.
#[test]
fn test_file_layer_wins_where_present() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let cwd = Path::new("/work");

    runner
        .run(
            &(value(), value(), value(), value()),
            |(cli_vfs, cli_prompt, file_vfs, file_prompt)| {
                let overrides = RawOverrides {
                    vfs_path: cli_vfs.map(PathBuf::from),
                    prompt: cli_prompt,
                    ..RawOverrides::default()
                };
                let section = FileSection {
                    vfs_path: file_vfs.clone(),
                    prompt: file_prompt.clone(),
                    startup_script: None,
                };

                let after_cli = apply_command_line_overrides(default_configuration(cwd), &overrides);
                let resolved = apply_file_overrides(after_cli.clone(), &section);

                prop_assert!(!resolved.vfs_path.as_os_str().is_empty());
                prop_assert_eq!(
                    resolved.vfs_path,
                    file_vfs.map(PathBuf::from).unwrap_or(after_cli.vfs_path)
                );
                prop_assert_eq!(resolved.prompt, file_prompt.unwrap_or(after_cli.prompt));
                Ok(())
            },
        )
        .unwrap();
}

/// A `vfs_path` key in the file decides the result whatever the command line says.
#[test]
fn test_file_vfs_path_beats_any_flag() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 32,
        ..proptest::test_runner::Config::default()
    });
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("emu.ini");

    runner
        .run(
            &("[a-zA-Z0-9/_.]{1,24}", value()),
            |(file_vfs, cli_vfs)| {
                std::fs::write(&config_file, format!("[emulator]\nvfs_path = {}\n", file_vfs))
                    .unwrap();
                let overrides = RawOverrides {
                    vfs_path: cli_vfs.map(PathBuf::from),
                    config_file: Some(config_file.clone()),
                    ..RawOverrides::default()
                };

                let resolved = ConfigResolver::resolve(temp_dir.path(), &overrides);
                prop_assert_eq!(resolved.config.vfs_path, PathBuf::from(file_vfs));
                Ok(())
            },
        )
        .unwrap();
}
