use ghub_domain::config::LoggingConfig;
use ghub_logger::{Logger, LoggerError};

#[test]
fn unknown_level_is_rejected_before_install() {
    let settings = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_settings("ghub-bad-settings", &settings).expect_err("level is invalid");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    // Nothing was installed, so a valid configuration still succeeds.
    let _logger = Logger::from_settings("ghub-bad-settings", &LoggingConfig::default())
        .expect("default settings should initialize");
}
