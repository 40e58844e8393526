// Unit tests for config load/save/validate and SMTP endpoint resolution

use crate::config::{AppConfig, CONFIG_FILE_NAME, SmtpConfig, log_level_from_str};
use crate::error::ConfigError;

use common::RedactedSecret;
use models::{MailProvider, SmtpSecurity};

use std::time::Duration;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing file yields defaults instead of an error.
///
/// **WHY THIS MATTERS**: First run has no config file; the tool must still work.
#[test]
fn given_missing_file_when_loaded_then_defaults_returned() {
    // GIVEN: An empty temp directory
    let dir = TempDir::new().unwrap();

    // WHEN: Loading a path that does not exist
    let config = AppConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();

    // THEN: Defaults
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.http.timeout, Duration::from_secs(30));
    assert!(config.http.verify_tls);
    assert_eq!(config.smtp.timeout, Duration::from_secs(60));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn given_partial_toml_when_loaded_then_missing_fields_defaulted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[http]
timeout = "5s"

[http.retry]
max_retries = 1
backoff_factor = "250ms"

[smtp]
provider = "gmail"
username = "me@gmail.com"
"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.http.timeout, Duration::from_secs(5));
    assert_eq!(config.http.retry.max_retries, 1);
    assert_eq!(config.http.retry.backoff_factor, Duration::from_millis(250));
    assert_eq!(config.http.retry.status_forcelist, vec![429, 500, 502, 503, 504]);
    assert_eq!(config.smtp.provider, Some(MailProvider::Gmail));
    assert_eq!(config.smtp.username.as_deref(), Some("me@gmail.com"));
}

/// **VALUE**: Verifies save followed by load preserves everything but the password.
///
/// **BUG THIS CATCHES**: A password written to disk in clear text.
#[test]
fn given_config_with_password_when_saved_then_password_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    let mut config = AppConfig::default();
    config.smtp.host = Some(String::from("mail.example.com"));
    config.smtp.password = Some(RedactedSecret::new("hunter2"));

    config.save(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let reloaded = AppConfig::load(&path).unwrap();

    assert!(!contents.contains("hunter2"));
    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(reloaded.smtp.host.as_deref(), Some("mail.example.com"));
    assert!(reloaded.smtp.password.is_none());
}

#[test]
fn given_malformed_toml_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[http\ntimeout = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let mut zero_timeout = AppConfig::default();
    zero_timeout.http.timeout = Duration::ZERO;

    let mut inverted_backoff = AppConfig::default();
    inverted_backoff.http.retry.backoff_factor = Duration::from_secs(10);
    inverted_backoff.http.retry.backoff_max = Duration::from_secs(1);

    let mut bad_status = AppConfig::default();
    bad_status.http.retry.status_forcelist = vec![503, 999];

    let mut zero_port = AppConfig::default();
    zero_port.smtp.port = Some(0);

    let mut bad_level = AppConfig::default();
    bad_level.logging.level = String::from("chatty");

    let mut future_version = AppConfig::default();
    future_version.version = 2;

    for config in [
        zero_timeout,
        inverted_backoff,
        bad_status,
        zero_port,
        bad_level,
        future_version,
    ] {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { .. }),
            "expected validation error, got {err}"
        );
    }
}

/// **VALUE**: Verifies provider defaults fill the endpoint and explicit values win.
#[test]
fn given_provider_when_endpoint_resolved_then_explicit_values_override() {
    let yahoo = SmtpConfig {
        provider: Some(MailProvider::Yahoo),
        ..SmtpConfig::default()
    };
    let endpoint = yahoo.endpoint();
    assert_eq!(endpoint.host, "smtp.mail.yahoo.com");
    assert_eq!(endpoint.port, 465);
    assert_eq!(endpoint.security, SmtpSecurity::ImplicitTls);

    let overridden = SmtpConfig {
        provider: Some(MailProvider::Yahoo),
        host: Some(String::from("relay.local")),
        security: Some(SmtpSecurity::Plain),
        port: Some(2525),
        ..SmtpConfig::default()
    };
    let endpoint = overridden.endpoint();
    assert_eq!(endpoint.host, "relay.local");
    assert_eq!(endpoint.port, 2525);
    assert_eq!(endpoint.security, SmtpSecurity::Plain);
}

#[test]
fn given_nothing_configured_when_endpoint_resolved_then_localhost_starttls() {
    let endpoint = SmtpConfig::default().endpoint();

    assert_eq!(endpoint.host, "localhost");
    assert_eq!(endpoint.port, 587);
    assert_eq!(endpoint.security, SmtpSecurity::StartTls);
}

#[test]
fn given_level_names_when_parsed_then_case_insensitive() {
    assert_eq!(log_level_from_str("DEBUG"), Some(log::LevelFilter::Debug));
    assert_eq!(log_level_from_str(" off "), Some(log::LevelFilter::Off));
    assert_eq!(log_level_from_str("loud"), None);
}

#[test]
fn given_configured_log_directory_when_resolved_then_used_verbatim() {
    let mut config = AppConfig::default();
    config.logging.directory = Some(std::path::PathBuf::from("/var/log/primer"));

    assert_eq!(
        config.logging.log_directory().as_deref(),
        Some(std::path::Path::new("/var/log/primer"))
    );
}
