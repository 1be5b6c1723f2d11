use ghub_kernel::config::{ConfigError, load_config};
use ghub_kernel::domain::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn settings_file_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"

[store]
dir = "/var/lib/ghub"
"#,
    )
    .unwrap();

    let settings: Settings = load_config(Some(&path)).expect("settings load");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.store.dir, std::path::PathBuf::from("/var/lib/ghub"));
    assert!(settings.logging.console);
}

#[test]
fn missing_settings_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = load_config::<Settings>(Some(&path)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
