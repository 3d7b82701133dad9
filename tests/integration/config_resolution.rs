//! Integration tests for configuration resolution

use super::test_utils::Workspace;
use shemu::config::{ConfigResolver, FileLayer, RawOverrides};
use shemu::error::ConfigFileError;
use std::path::PathBuf;

#[test]
fn test_defaults_without_any_source() {
    let ws = Workspace::new();
    let resolved = ConfigResolver::resolve(ws.path(), &RawOverrides::default());

    assert_eq!(resolved.config.vfs_path, ws.path().join("vfs"));
    assert_eq!(resolved.config.prompt, "> ");
    assert!(resolved.config.startup_script.is_none());
    assert!(resolved.config.config_file.is_none());
}

#[test]
fn test_command_line_only() {
    let ws = Workspace::new();
    let overrides = RawOverrides {
        vfs_path: Some(PathBuf::from("/opt/vfs")),
        prompt: None,
        startup_script: Some(PathBuf::from("boot.sh")),
        config_file: None,
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert_eq!(resolved.config.vfs_path, PathBuf::from("/opt/vfs"));
    assert_eq!(resolved.config.prompt, "> ");
    assert_eq!(resolved.config.startup_script, Some(PathBuf::from("boot.sh")));
}

#[test]
fn test_file_section_wins_for_every_key_it_has() {
    let ws = Workspace::new();
    let config_file = ws.write(
        "emu.ini",
        r#"
[emulator]
vfs_path = /file/vfs
prompt = file$
startup_script = file.sh

[unrelated]
vfs_path = /ignored
"#,
    );

    let overrides = RawOverrides {
        vfs_path: Some(PathBuf::from("/cli/vfs")),
        prompt: Some("cli>".to_string()),
        startup_script: Some(PathBuf::from("cli.sh")),
        config_file: Some(config_file.clone()),
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert_eq!(resolved.config.vfs_path, PathBuf::from("/file/vfs"));
    assert_eq!(resolved.config.prompt, "file$");
    assert_eq!(resolved.config.startup_script, Some(PathBuf::from("file.sh")));
    assert_eq!(resolved.config.config_file, Some(config_file));
}

#[test]
fn test_partial_section_keeps_command_line_for_missing_keys() {
    let ws = Workspace::new();
    let config_file = ws.write("emu.ini", "[emulator]\nprompt = file>\n");

    let overrides = RawOverrides {
        vfs_path: Some(PathBuf::from("/cli/vfs")),
        config_file: Some(config_file),
        ..RawOverrides::default()
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert_eq!(resolved.config.vfs_path, PathBuf::from("/cli/vfs"));
    assert_eq!(resolved.config.prompt, "file>");
    assert!(resolved.config.startup_script.is_none());
}

#[test]
fn test_missing_file_matches_resolution_without_file() {
    let ws = Workspace::new();
    let overrides = RawOverrides {
        prompt: Some("cli>".to_string()),
        startup_script: Some(PathBuf::from("cli.sh")),
        ..RawOverrides::default()
    };
    let with_missing = RawOverrides {
        config_file: Some(ws.missing("absent.ini")),
        ..overrides.clone()
    };

    let baseline = ConfigResolver::resolve(ws.path(), &overrides).config;
    let resolved = ConfigResolver::resolve(ws.path(), &with_missing);

    assert_eq!(resolved.config.vfs_path, baseline.vfs_path);
    assert_eq!(resolved.config.prompt, baseline.prompt);
    assert_eq!(resolved.config.startup_script, baseline.startup_script);
    assert!(matches!(
        resolved.file_layer,
        FileLayer::Skipped(ConfigFileError::NotFound(_))
    ));
}

#[test]
fn test_malformed_file_degrades_to_command_line() {
    let ws = Workspace::new();
    let config_file = ws.write("emu.ini", "[emulator\nprompt = file>\n");

    let overrides = RawOverrides {
        prompt: Some("cli>".to_string()),
        config_file: Some(config_file),
        ..RawOverrides::default()
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert_eq!(resolved.config.prompt, "cli>");
    assert!(matches!(
        resolved.file_layer,
        FileLayer::Skipped(ConfigFileError::Parse { .. })
    ));
}

#[test]
fn test_file_cannot_redirect_config_file() {
    let ws = Workspace::new();
    let config_file = ws.write("emu.ini", "[emulator]\nconfig_file = other.ini\n");

    let overrides = RawOverrides {
        config_file: Some(config_file.clone()),
        ..RawOverrides::default()
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert_eq!(resolved.config.config_file, Some(config_file));
}

#[test]
fn test_empty_file_startup_script_disables_command_line_script() {
    let ws = Workspace::new();
    let config_file = ws.write("emu.ini", "[emulator]\nstartup_script =\n");

    let overrides = RawOverrides {
        startup_script: Some(PathBuf::from("cli.sh")),
        config_file: Some(config_file),
        ..RawOverrides::default()
    };
    let resolved = ConfigResolver::resolve(ws.path(), &overrides);

    assert!(resolved.config.startup_script.is_none());
    match resolved.file_layer {
        FileLayer::Applied(section) => assert_eq!(section.startup_script.as_deref(), Some("")),
        other => panic!("expected Applied, got {:?}", other),
    }
}
