//! Configuration struct definitions.

use crate::level::Level;
use serde::{Deserialize, Deserializer};

/// Formatter declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// `%`-style line layout.
    pub format: String,
    /// strftime pattern for `%(asctime)s`.
    pub datefmt: Option<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            format: "%(message)s".to_string(),
            datefmt: None,
        }
    }
}

/// Handler declaration. Which keys matter depends on `class`; unknown keys are rejected.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// Handler kind, e.g. `logging.handlers.RotatingFileHandler`.
    pub class: String,
    /// Minimum level (absent accepts every record).
    #[serde(default)]
    pub level: Option<Level>,
    /// Formatter name.
    #[serde(default)]
    pub formatter: Option<String>,
    /// Stream destination for stream handlers.
    #[serde(default)]
    pub stream: Option<String>,
    /// Target path for file handlers.
    #[serde(default)]
    pub filename: Option<String>,
    /// Rotation threshold in bytes (0 = never rotate).
    #[serde(default, rename = "maxBytes", alias = "max_bytes")]
    pub max_bytes: u64,
    /// Number of rotated files kept.
    #[serde(default, rename = "backupCount", alias = "backup_count")]
    pub backup_count: u32,
    /// Text encoding.
    #[serde(default)]
    pub encoding: Option<String>,
    /// `a` (append) or `w` (truncate).
    #[serde(default)]
    pub mode: Option<String>,
    /// Defer opening the file until the first record.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub delay: bool,
}

impl HandlerConfig {
    /// Resolved kind, `None` when `class` is not recognized.
    #[must_use]
    pub fn kind(&self) -> Option<HandlerKind> {
        HandlerKind::from_class(&self.class)
    }
}

/// Logger declaration, also used for `root`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Threshold (absent inherits from the nearest ancestor).
    pub level: Option<Level>,
    /// Handler names, in emission order.
    pub handlers: Vec<String>,
    /// Whether records continue to ancestor loggers.
    #[serde(deserialize_with = "deserialize_flag")]
    pub propagate: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            handlers: Vec::new(),
            propagate: true,
        }
    }
}

/// Built-in handler kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Stream,
    RotatingFile,
    File,
    Null,
}

impl HandlerKind {
    /// Accepts the dotted class names used by existing documents as well as short aliases.
    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        match class.trim() {
            "logging.StreamHandler" | "StreamHandler" | "stream" | "console" => Some(Self::Stream),
            "logging.handlers.RotatingFileHandler" | "RotatingFileHandler" | "rotating_file" => {
                Some(Self::RotatingFile)
            }
            "logging.FileHandler" | "FileHandler" | "file" => Some(Self::File),
            "logging.NullHandler" | "NullHandler" | "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// File kinds need `filename`, `encoding` and `mode` checks.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::RotatingFile | Self::File)
    }
}

/// Console destination of a stream handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamTarget {
    Stdout,
    #[default]
    Stderr,
}

impl StreamTarget {
    /// `None` for anything that is not stdout or stderr.
    #[must_use]
    pub fn parse(stream: &str) -> Option<Self> {
        match stream.trim() {
            "ext://sys.stdout" | "stdout" => Some(Self::Stdout),
            "ext://sys.stderr" | "stderr" => Some(Self::Stderr),
            _ => None,
        }
    }
}

/// Only UTF-8 is written; accepts the usual spellings.
#[must_use]
pub fn is_utf8_encoding(encoding: &str) -> bool {
    matches!(
        encoding.trim().to_lowercase().as_str(),
        "utf8" | "utf-8" | "utf_8" | "u8"
    )
}

/// Documents written for YAML 1.1 loaders spell booleans as `yes`/`no`/`on`/`off`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

pub(super) fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "on" | "true" => Ok(true),
            "no" | "n" | "off" | "false" => Ok(false),
            _ => Err(serde::de::Error::custom(format!("invalid flag value: '{s}'"))),
        },
    }
}

pub(super) const fn default_true() -> bool {
    true
}
