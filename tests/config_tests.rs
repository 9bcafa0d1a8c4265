mod common;

use common::write_file;
use std::path::PathBuf;
use tempfile::TempDir;
use webview_shell::config::{Config, ConfigError, ENV_VAR, LogLevel};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.window_width, 800);
    assert_eq!(config.window_height, 600);
    assert_eq!(config.app_name, "webview-shell");
    assert_eq!(config.log_level, LogLevel::Off);
    assert!(!config.dev_mode);
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_window_size(1024, 768)
        .with_document("site/main.html")
        .with_dev_mode(true);
    assert_eq!(config.window_width, 1024);
    assert_eq!(config.window_height, 768);
    assert_eq!(config.document, Some(PathBuf::from("site/main.html")));
    assert!(config.dev_mode);
}

#[test]
fn test_load_partial_yaml_keeps_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "config.yaml", "window_width: 1280\nlog_level: debug\n");

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.window_width, 1280);
    assert_eq!(config.window_height, 600);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_load_empty_file_is_default() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "config.yaml", "  \n");
    assert_eq!(Config::load_from(&path).expect("empty config"), Config::default());
}

#[test]
fn test_load_invalid_yaml_is_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "config.yaml", "window_width: [not a number\n");
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_zero_size_is_validation_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(dir.path(), "config.yaml", "window_height: 0\n");
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let result = Config::load_from(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_environment_enables_dev_mode() {
    let mut config = Config::default();
    config.apply_environment(|key| (key == ENV_VAR).then(|| "development".to_string()));
    assert!(config.dev_mode);
}

#[test]
fn test_environment_other_values_are_inert() {
    let mut config = Config::default();
    config.apply_environment(|_| Some("production".to_string()));
    assert!(!config.dev_mode);

    let mut from_file = Config::default().with_dev_mode(true);
    from_file.apply_environment(|_| None);
    assert!(from_file.dev_mode);
}

#[test]
fn test_resolve_document_prefers_install_dir() {
    let install = TempDir::new().expect("install dir");
    let fallback = TempDir::new().expect("fallback dir");
    let installed = write_file(install.path(), "app/index.html", "<p>installed</p>");
    write_file(fallback.path(), "app/index.html", "<p>fallback</p>");

    let resolved = Config::default().resolve_document(Some(install.path()), Some(fallback.path()));
    assert_eq!(resolved, installed);
}

#[test]
fn test_resolve_document_uses_fallback_when_not_installed() {
    let install = TempDir::new().expect("install dir");
    let fallback = TempDir::new().expect("fallback dir");
    let bundled = write_file(fallback.path(), "app/index.html", "<p>fallback</p>");

    let resolved = Config::default().resolve_document(Some(install.path()), Some(fallback.path()));
    assert_eq!(resolved, bundled);
}

#[test]
fn test_resolve_document_missing_everywhere_points_at_install_dir() {
    let install = TempDir::new().expect("install dir");
    let resolved = Config::default().resolve_document(Some(install.path()), None);
    assert_eq!(resolved, install.path().join("app/index.html"));
}

#[test]
fn test_resolve_document_override() {
    let install = TempDir::new().expect("install dir");

    let relative = Config::default().with_document("pages/start.html");
    assert_eq!(
        relative.resolve_document(Some(install.path()), None),
        install.path().join("pages/start.html")
    );

    let absolute_path = install.path().join("abs.html");
    let absolute = Config::default().with_document(&absolute_path);
    assert_eq!(absolute.resolve_document(None, None), absolute_path);
}
