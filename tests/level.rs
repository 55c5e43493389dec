//! Tests for log level functionality.

use logroute::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Critical);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "DEBUG");
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Warning.to_string(), "WARNING");
    assert_eq!(Level::Error.to_string(), "ERROR");
    assert_eq!(Level::Critical.to_string(), "CRITICAL");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Critical);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'verbose'");
}

#[test]
fn level_default_is_root_threshold() {
    assert_eq!(Level::default(), Level::Warning);
}
