//! Tests for the process-wide entry points: `setup_logging`, `dict_config`, `get_logger`.
//!
//! They share one global manager, so every test holds `SERIAL` while it runs.

use logroute::config::LoggingConfig;
use logroute::{Error, Level};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Root at INFO writing to `standard.log` and `warning.log` inside `dir`.
fn write_document(dir: &Path) -> PathBuf {
    let doc = format!(
        "version: 1
disable_existing_loggers: false
formatters:
  simple:
    format: '%(asctime)s - %(name)s - %(levelname)s - %(message)s'
handlers:
  info_file_handler:
    class: logging.handlers.RotatingFileHandler
    level: INFO
    formatter: simple
    filename: '{standard}'
    maxBytes: 10485760
    backupCount: 1
  warning_file_handler:
    class: logging.handlers.RotatingFileHandler
    level: WARNING
    formatter: simple
    filename: '{warning}'
    maxBytes: 10485760
    backupCount: 1
root:
  level: INFO
  handlers: [info_file_handler, warning_file_handler]
",
        standard = dir.join("standard.log").display(),
        warning = dir.join("warning.log").display(),
    );
    let path = dir.join("logging.yaml");
    fs::write(&path, doc).unwrap();
    path
}

fn lines(dir: &Path, file: &str) -> Vec<String> {
    fs::read_to_string(dir.join(file))
        .unwrap_or_default()
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn setup_logging_writes_one_line_per_sink() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    let config = logroute::setup_logging(Some(&path)).unwrap();
    assert_eq!(config.handlers.len(), 2);

    logroute::get_logger("foo").critical("disk full");
    logroute::shutdown();

    let pattern =
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} - foo - CRITICAL - disk full$")
            .unwrap();
    for file in ["standard.log", "warning.log"] {
        let got = lines(tmp.path(), file);
        assert_eq!(got.len(), 1, "{file}: {got:?}");
        assert!(pattern.is_match(&got[0]), "{file}: {}", got[0]);
    }
}

#[test]
fn failed_setup_is_logged_through_current_root_and_returned() {
    let _guard = serial();
    let tmp = TempDir::new().unwrap();
    logroute::setup_logging(Some(&write_document(tmp.path()))).unwrap();

    let missing = tmp.path().join("absent.yaml");
    let err = logroute::setup_logging(Some(&missing)).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound(ref p) if *p == missing));

    // The previous configuration is still in place.
    logroute::get_logger("foo").warning("still routed");
    logroute::shutdown();

    let standard = lines(tmp.path(), "standard.log");
    assert_eq!(standard.len(), 2, "{standard:?}");
    assert!(standard[0].contains(&format!(
        " - root - ERROR - Error loading of logging config: {}: ",
        missing.display()
    )));
    assert!(standard[1].ends_with(" - foo - WARNING - still routed"));
    assert_eq!(lines(tmp.path(), "warning.log").len(), 2);
}

#[test]
fn dict_config_applies_to_shared_manager() {
    let _guard = serial();
    let config = LoggingConfig::from_yaml_str(
        "version: 1\nhandlers:\n  n:\n    class: NullHandler\nloggers:\n  app:\n    level: DEBUG\n    handlers: [n]\n    propagate: no\nroot:\n  level: ERROR\n",
    )
    .unwrap();
    logroute::dict_config(&config).unwrap();

    let app = logroute::get_logger("app.db");
    assert_eq!(app.name(), "app.db");
    assert_eq!(app.effective_level(), Level::Debug);
    assert_eq!(logroute::global().route("app.db", Level::Debug), vec!["n"]);
    assert_eq!(logroute::get_logger("other").effective_level(), Level::Error);
    assert!(std::ptr::eq(logroute::global(), logroute::global()));

    let mut broken = config.clone();
    broken.version = 2;
    assert!(matches!(
        logroute::dict_config(&broken),
        Err(Error::UnsupportedVersion(2))
    ));
    assert_eq!(logroute::global().effective_level("other"), Level::Error);

    logroute::shutdown();
}
