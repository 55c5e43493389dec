//! Logging document loading, format detection, default-location lookup and validation.
//!
//! Separated from struct definitions so that the loading logic (file I/O, path lookup,
//! referential checks) stays independent of the serde schema.

mod structs;

pub use structs::{
    FormatterConfig, HandlerConfig, HandlerKind, LoggerConfig, StreamTarget, is_utf8_encoding,
};

use crate::internal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The document shipped with the crate, used when no file is found.
pub const BUILTIN_DOCUMENT: &str = include_str!("../../logging.yaml");

/// File looked up in the working directory and in the user config directory.
pub const DEFAULT_FILE_NAME: &str = "logging.yaml";

/// The only schema version that exists.
pub const SCHEMA_VERSION: u32 = 1;

/// Whole logging document. Maps are ordered so summaries and errors are deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Schema version, must be 1.
    pub version: u32,
    /// Loggers known before this document was applied are disabled unless configured here.
    #[serde(
        default = "structs::default_true",
        deserialize_with = "structs::deserialize_flag"
    )]
    pub disable_existing_loggers: bool,
    /// Named line layouts.
    #[serde(default)]
    pub formatters: BTreeMap<String, FormatterConfig>,
    /// Named sinks.
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerConfig>,
    /// Named loggers.
    #[serde(default)]
    pub loggers: BTreeMap<String, LoggerConfig>,
    /// Fallback logger; absent leaves the current root untouched.
    #[serde(default)]
    pub root: Option<LoggerConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            disable_existing_loggers: true,
            formatters: BTreeMap::new(),
            handlers: BTreeMap::new(),
            loggers: BTreeMap::new(),
            root: None,
        }
    }
}

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// YAML is the native format, so unknown extensions fall back to it.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl LoggingConfig {
    /// # Errors
    /// Fails on malformed YAML or schema mismatches.
    pub fn from_yaml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// # Errors
    /// Fails on malformed TOML or schema mismatches.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails on malformed JSON or schema mismatches.
    pub fn from_json_str(content: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses `content` in the given format without validating it.
    ///
    /// # Errors
    /// Fails on syntax or schema errors.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, crate::Error> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(content),
            DocumentFormat::Toml => Self::from_toml_str(content),
            DocumentFormat::Json => Self::from_json_str(content),
        }
    }

    /// The shipped `logging.yaml`.
    ///
    /// # Errors
    /// Only fails if the embedded document was edited into something invalid.
    pub fn builtin() -> Result<Self, crate::Error> {
        let config = Self::from_yaml_str(BUILTIN_DOCUMENT)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses (format picked by extension) and validates a document.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        internal::debug("CONFIG", &format!("Reading {}", path.display()));
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, DocumentFormat::from_path(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Primary entry point: an explicit path must exist; otherwise the default locations
    /// are tried and the built-in document is the last resort.
    ///
    /// # Errors
    /// Fails if an explicit path is missing or any found document is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, crate::Error> {
        if let Some(path) = explicit {
            let expanded = expand_path(path);
            if !expanded.exists() {
                return Err(crate::Error::ConfigNotFound(expanded));
            }
            return Self::load_from(&expanded);
        }

        match Self::resolve_path(None) {
            Some(path) => {
                let config = Self::load_from(&path)?;
                internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
                Ok(config)
            }
            None => {
                internal::debug("CONFIG", "No config file found, using built-in document");
                Self::builtin()
            }
        }
    }

    /// Lookup order: explicit path, `./logging.yaml`, `<config dir>/logroute/logging.yaml`.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            let expanded = expand_path(path);
            return expanded.exists().then_some(expanded);
        }

        let local = PathBuf::from(DEFAULT_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        directories::ProjectDirs::from("", "", "logroute")
            .map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
            .filter(|p| p.exists())
    }

    /// Checks everything the loader cannot express in the type system: version, references
    /// between sections and per-kind handler parameters. Reports the first violation.
    ///
    /// # Errors
    /// The first violation found, naming the offending handler or logger.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.version != SCHEMA_VERSION {
            return Err(crate::Error::UnsupportedVersion(self.version));
        }

        for (name, handler) in &self.handlers {
            validate_handler(name, handler, self)?;
        }

        let named = self.loggers.iter().map(|(n, l)| (n.as_str(), l));
        for (logger, config) in named.chain(self.root.iter().map(|r| ("root", r))) {
            if let Some(missing) = config
                .handlers
                .iter()
                .find(|h| !self.handlers.contains_key(h.as_str()))
            {
                return Err(crate::Error::UnknownHandler {
                    logger: logger.to_string(),
                    handler: missing.clone(),
                });
            }
        }

        Ok(())
    }

    /// Paths of every file-backed handler, with `~` expanded.
    #[must_use]
    pub fn log_files(&self) -> Vec<PathBuf> {
        self.handlers
            .values()
            .filter(|h| h.kind().is_some_and(HandlerKind::is_file))
            .filter_map(|h| h.filename.as_deref())
            .map(|f| expand_path(Path::new(f)))
            .collect()
    }
}

fn validate_handler(
    name: &str,
    handler: &HandlerConfig,
    config: &LoggingConfig,
) -> Result<(), crate::Error> {
    let Some(kind) = handler.kind() else {
        return Err(crate::Error::UnknownHandlerClass {
            handler: name.to_string(),
            class: handler.class.clone(),
        });
    };

    if let Some(formatter) = &handler.formatter
        && !config.formatters.contains_key(formatter)
    {
        return Err(crate::Error::UnknownFormatter {
            handler: name.to_string(),
            formatter: formatter.clone(),
        });
    }

    if kind == HandlerKind::Stream
        && let Some(stream) = &handler.stream
        && StreamTarget::parse(stream).is_none()
    {
        return Err(crate::Error::UnknownStream {
            handler: name.to_string(),
            stream: stream.clone(),
        });
    }

    if kind.is_file() {
        if handler.filename.as_deref().is_none_or(str::is_empty) {
            return Err(crate::Error::MissingFilename(name.to_string()));
        }
        if let Some(encoding) = &handler.encoding
            && !is_utf8_encoding(encoding)
        {
            return Err(crate::Error::UnsupportedEncoding {
                handler: name.to_string(),
                encoding: encoding.clone(),
            });
        }
        if let Some(mode) = &handler.mode
            && !matches!(mode.as_str(), "a" | "w")
        {
            return Err(crate::Error::InvalidMode {
                handler: name.to_string(),
                mode: mode.clone(),
            });
        }
    }

    Ok(())
}

/// Expands a leading `~` the way the shell would.
#[must_use]
pub fn expand_path(path: &Path) -> PathBuf {
    path.to_str().map_or_else(
        || path.to_path_buf(),
        |s| PathBuf::from(shellexpand::tilde(s).as_ref()),
    )
}
