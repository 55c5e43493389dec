//! Severity levels that gate which records reach which loggers and handlers.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so loggers and handlers can compare a record's level against their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Detailed diagnostics, normally only written to the debug file.
    Debug = 10,
    /// Normal operational milestones.
    Info = 20,
    /// Something unexpected that the program recovered from.
    #[default]
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The program may not be able to continue.
    Critical = 50,
}

impl Level {
    /// Upper-case because this is what `%(levelname)s` renders and what config documents use.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Numeric severity rendered by `%(levelno)s`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::value`]; only the five standard severities exist.
    #[must_use]
    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Every level, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Documents may spell a level by name (`DEBUG`) or by number (`10`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(u64),
    Name(String),
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLevel::deserialize(deserializer)? {
            RawLevel::Number(n) => Self::from_value(n)
                .ok_or_else(|| serde::de::Error::custom(ParseLevelError(n.to_string()))),
            RawLevel::Name(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
