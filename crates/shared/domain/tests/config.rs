use ghub_domain::config::{LoggingConfig, Settings, StoreConfig};
use ghub_domain::constants::MODULE_NAME;
use serde_json::json;

#[test]
fn settings_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.dir.is_none());

    let store = StoreConfig::default();
    assert_eq!(store.dir, std::path::PathBuf::from("config"));
    assert_eq!(store.module, MODULE_NAME);
}

#[test]
fn settings_deserialize_with_partial_sections() {
    let raw = json!({
        "logging": { "level": "debug", "json": true },
        "store": { "dir": "/etc/ghub" }
    });

    let settings: Settings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.logging.json);
    assert!(settings.logging.console, "unspecified fields keep their defaults");
    assert_eq!(settings.store.dir, std::path::PathBuf::from("/etc/ghub"));
    assert_eq!(settings.store.module, MODULE_NAME);
}

#[test]
fn settings_clone_on_write() {
    let original = Settings::default();
    let mut changed = original.clone();
    changed.logging.level = "trace".to_owned();

    assert_eq!(original.logging.level, "info");
    assert_eq!(changed.logging.level, "trace");
}
