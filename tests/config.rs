//! Tests for document parsing, lookup and validation.

use logroute::config::{BUILTIN_DOCUMENT, HandlerKind, LoggingConfig};
use logroute::{Error, Level};
use std::fs;
use tempfile::TempDir;

#[test]
fn builtin_document_matches_contract() {
    let config = LoggingConfig::builtin().unwrap();

    assert_eq!(config.version, 1);
    assert!(!config.disable_existing_loggers);
    assert_eq!(
        config.formatters["simple"].format,
        "%(asctime)s - %(name)s - %(levelname)s - %(message)s"
    );

    let console = &config.handlers["console"];
    assert_eq!(console.kind(), Some(HandlerKind::Stream));
    assert_eq!(console.level, Some(Level::Debug));
    assert_eq!(console.stream.as_deref(), Some("ext://sys.stdout"));

    for (name, file, level, backups) in [
        ("debug_file_handler", "log/debug.log", Level::Debug, 5),
        ("info_file_handler", "log/standard.log", Level::Info, 1),
        ("warning_file_handler", "log/warning.log", Level::Warning, 1),
    ] {
        let h = &config.handlers[name];
        assert_eq!(h.kind(), Some(HandlerKind::RotatingFile), "{name}");
        assert_eq!(h.filename.as_deref(), Some(file));
        assert_eq!(h.level, Some(level));
        assert_eq!(h.max_bytes, 10_485_760);
        assert_eq!(h.backup_count, backups);
        assert_eq!(h.encoding.as_deref(), Some("utf8"));
        assert_eq!(h.formatter.as_deref(), Some("simple"));
    }

    let main = &config.loggers["__main__"];
    assert_eq!(main.level, Some(Level::Debug));
    assert!(!main.propagate);
    assert_eq!(
        main.handlers,
        vec![
            "console",
            "debug_file_handler",
            "info_file_handler",
            "warning_file_handler"
        ]
    );

    let root = config.root.as_ref().unwrap();
    assert_eq!(root.level, Some(Level::Info));
    assert_eq!(
        root.handlers,
        vec!["console", "info_file_handler", "warning_file_handler"]
    );
}

#[test]
fn builtin_text_is_embedded() {
    assert!(BUILTIN_DOCUMENT.contains("propagate: no"));
}

#[test]
fn yaml_flag_spellings() {
    for (text, expected) in [("yes", true), ("No", false), ("on", true), ("OFF", false)] {
        let doc = format!(
            "version: 1\ndisable_existing_loggers: {text}\nloggers:\n  a:\n    propagate: {text}\n"
        );
        let config = LoggingConfig::from_yaml_str(&doc).unwrap();
        assert_eq!(config.disable_existing_loggers, expected, "{text}");
        assert_eq!(config.loggers["a"].propagate, expected, "{text}");
    }
}

#[test]
fn invalid_flag_is_rejected() {
    let doc = "version: 1\nloggers:\n  a:\n    propagate: maybe\n";
    assert!(matches!(
        LoggingConfig::from_yaml_str(doc),
        Err(Error::Yaml(_))
    ));
}

#[test]
fn defaults_when_sections_missing() {
    let config = LoggingConfig::from_yaml_str("version: 1\n").unwrap();
    assert!(config.disable_existing_loggers);
    assert!(config.handlers.is_empty());
    assert!(config.root.is_none());
    config.validate().unwrap();
}

#[test]
fn negative_backup_count_is_parse_error() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: RotatingFileHandler\n    filename: x.log\n    backupCount: -1\n";
    assert!(LoggingConfig::from_yaml_str(doc).is_err());
}

#[test]
fn snake_case_aliases() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: rotating_file\n    filename: x.log\n    max_bytes: 100\n    backup_count: 2\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert_eq!(config.handlers["f"].max_bytes, 100);
    assert_eq!(config.handlers["f"].backup_count, 2);
}

#[test]
fn misspelled_handler_key_is_rejected() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: RotatingFileHandler\n    filename: x.log\n    maxbytes: 100\n    backupcount: 2\n";
    let err = LoggingConfig::from_yaml_str(doc).unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
    assert!(err.to_string().contains("maxbytes"), "{err}");
}

#[test]
fn unknown_formatter_and_logger_keys_are_rejected() {
    let formatter = "version: 1\nformatters:\n  f:\n    fromat: '%(message)s'\n";
    assert!(LoggingConfig::from_yaml_str(formatter).is_err());

    let logger = "version: 1\nloggers:\n  app:\n    level: INFO\n    propagates: no\n";
    assert!(LoggingConfig::from_yaml_str(logger).is_err());

    let root = "version: 1\nroot:\n  levle: INFO\n";
    assert!(LoggingConfig::from_yaml_str(root).is_err());
}

#[test]
fn numeric_levels() {
    let doc = "version: 1\nhandlers:\n  n:\n    class: NullHandler\n    level: 40\nroot:\n  level: 10\n  handlers: [n]\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert_eq!(config.handlers["n"].level, Some(Level::Error));
    assert_eq!(config.root.unwrap().level, Some(Level::Debug));

    let json = r#"{"version": 1, "loggers": {"app": {"level": 20}}}"#;
    let config = LoggingConfig::from_json_str(json).unwrap();
    assert_eq!(config.loggers["app"].level, Some(Level::Info));
}

#[test]
fn non_standard_numeric_level_is_rejected() {
    let doc = "version: 1\nroot:\n  level: 15\n";
    let err = LoggingConfig::from_yaml_str(doc).unwrap_err();
    assert!(err.to_string().contains("unknown log level: '15'"), "{err}");
}

#[test]
fn toml_document() {
    let doc = r#"
version = 1
disable_existing_loggers = false

[formatters.simple]
format = "%(name)s %(message)s"

[handlers.out]
class = "logging.StreamHandler"
level = "INFO"
formatter = "simple"
stream = "ext://sys.stderr"

[root]
level = "WARNING"
handlers = ["out"]
"#;
    let config = LoggingConfig::from_toml_str(doc).unwrap();
    config.validate().unwrap();
    assert_eq!(config.handlers["out"].level, Some(Level::Info));
    assert_eq!(config.root.unwrap().level, Some(Level::Warning));
}

#[test]
fn json_document() {
    let doc = r#"{
        "version": 1,
        "handlers": {"null": {"class": "logging.NullHandler"}},
        "loggers": {"app": {"level": "DEBUG", "handlers": ["null"], "propagate": false}}
    }"#;
    let config = LoggingConfig::from_json_str(doc).unwrap();
    config.validate().unwrap();
    assert!(!config.loggers["app"].propagate);
}

#[test]
fn unsupported_version() {
    let config = LoggingConfig::from_yaml_str("version: 2\n").unwrap();
    assert!(matches!(config.validate(), Err(Error::UnsupportedVersion(2))));
}

#[test]
fn dangling_formatter_reference() {
    let doc = "version: 1\nhandlers:\n  c:\n    class: StreamHandler\n    formatter: missing\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    match config.validate() {
        Err(Error::UnknownFormatter { handler, formatter }) => {
            assert_eq!(handler, "c");
            assert_eq!(formatter, "missing");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn dangling_handler_reference_in_root() {
    let doc = "version: 1\nroot:\n  handlers: [ghost]\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    match config.validate() {
        Err(Error::UnknownHandler { logger, handler }) => {
            assert_eq!(logger, "root");
            assert_eq!(handler, "ghost");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_handler_class() {
    let doc = "version: 1\nhandlers:\n  s:\n    class: logging.handlers.SysLogHandler\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert!(matches!(
        config.validate(),
        Err(Error::UnknownHandlerClass { .. })
    ));
}

#[test]
fn file_handler_needs_filename() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: logging.FileHandler\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert!(matches!(config.validate(), Err(Error::MissingFilename(h)) if h == "f"));
}

#[test]
fn non_utf8_encoding_rejected() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: FileHandler\n    filename: a.log\n    encoding: latin-1\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert!(matches!(
        config.validate(),
        Err(Error::UnsupportedEncoding { .. })
    ));
}

#[test]
fn unknown_stream_rejected() {
    let doc = "version: 1\nhandlers:\n  c:\n    class: StreamHandler\n    stream: ext://sys.stdin\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert!(matches!(config.validate(), Err(Error::UnknownStream { .. })));
}

#[test]
fn invalid_mode_rejected() {
    let doc = "version: 1\nhandlers:\n  f:\n    class: FileHandler\n    filename: a.log\n    mode: r\n";
    let config = LoggingConfig::from_yaml_str(doc).unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidMode { .. })));
}

#[test]
fn load_from_picks_parser_by_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("logging.json");
    fs::write(&path, r#"{"version": 1, "root": {"level": "ERROR"}}"#).unwrap();

    let config = LoggingConfig::load_from(&path).unwrap();
    assert_eq!(config.root.unwrap().level, Some(Level::Error));
}

#[test]
fn load_from_validates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.yaml");
    fs::write(&path, "version: 1\nroot:\n  handlers: [nope]\n").unwrap();

    assert!(matches!(
        LoggingConfig::load_from(&path),
        Err(Error::UnknownHandler { .. })
    ));
}

#[test]
fn explicit_missing_path_is_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.yaml");
    assert!(matches!(
        LoggingConfig::load(Some(&path)),
        Err(Error::ConfigNotFound(p)) if p == path
    ));
    assert!(LoggingConfig::resolve_path(Some(&path)).is_none());
}
