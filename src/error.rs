//! Unified error type for all logroute operations.

use std::path::PathBuf;

/// Error type for logroute operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// YAML document parsing error.
    Yaml(serde_yaml::Error),
    /// TOML document parsing error.
    Toml(toml::de::Error),
    /// JSON document parsing error.
    Json(serde_json::Error),
    /// Explicitly requested config file does not exist.
    ConfigNotFound(PathBuf),
    /// Only schema version 1 exists.
    UnsupportedVersion(u32),
    /// A handler names a formatter that is not declared.
    UnknownFormatter { handler: String, formatter: String },
    /// A logger names a handler that is not declared.
    UnknownHandler { logger: String, handler: String },
    /// Handler `class` does not map to a known handler kind.
    UnknownHandlerClass { handler: String, class: String },
    /// File-backed handler without a `filename`.
    MissingFilename(String),
    /// Log files are always written as UTF-8.
    UnsupportedEncoding { handler: String, encoding: String },
    /// Stream handler destination is neither stdout nor stderr.
    UnknownStream { handler: String, stream: String },
    /// File open mode other than append or write.
    InvalidMode { handler: String, mode: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Yaml(e) => write!(f, "YAML parse error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::ConfigNotFound(p) => write!(f, "config file not found: {}", p.display()),
            Self::UnsupportedVersion(v) => write!(f, "unsupported config version: {v}"),
            Self::UnknownFormatter { handler, formatter } => {
                write!(f, "handler '{handler}' references unknown formatter '{formatter}'")
            }
            Self::UnknownHandler { logger, handler } => {
                write!(f, "logger '{logger}' references unknown handler '{handler}'")
            }
            Self::UnknownHandlerClass { handler, class } => {
                write!(f, "handler '{handler}' has unknown class '{class}'")
            }
            Self::MissingFilename(handler) => {
                write!(f, "handler '{handler}' needs a filename")
            }
            Self::UnsupportedEncoding { handler, encoding } => {
                write!(f, "handler '{handler}' uses unsupported encoding '{encoding}'")
            }
            Self::UnknownStream { handler, stream } => {
                write!(f, "handler '{handler}' has unknown stream '{stream}'")
            }
            Self::InvalidMode { handler, mode } => {
                write!(f, "handler '{handler}' has invalid mode '{mode}'")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Yaml(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
