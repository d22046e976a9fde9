use charview::api::DEFAULT_ENDPOINT;
use charview::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("charview/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
endpoint = "http://127.0.0.1:8080/api/character"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint, "http://127.0.0.1:8080/api/character");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn log_file_override() {
    let (_dir, path) = write_config(
        r#"
[logging]
level = "debug"
file = "/tmp/charview-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.log_path(),
        std::path::PathBuf::from("/tmp/charview-test.log")
    );
}

#[test]
fn default_log_path_under_charview_dir() {
    assert!(Config::default()
        .log_path()
        .ends_with("charview/charview.log"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nendpoint = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn non_http_endpoint_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[api]
endpoint = "ftp://example.com/characters"
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("http(s)"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
