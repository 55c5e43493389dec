//! Handlers are the sinks records end up in. The `Handler` trait lets the logger registry
//! fan a record out without knowing whether it lands on the console or in a rotating file.

mod null;
mod rotating;
mod stream;

pub use null::NullHandler;
pub use rotating::RotatingFileHandler;
pub use stream::StreamHandler;

use crate::config::{HandlerConfig, HandlerKind, StreamTarget, expand_path};
use crate::fmt::Formatter;
use crate::internal;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Everything a handler needs to render one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Name of the logger the record was created on (`root` for the root logger).
    pub name: String,
    pub level: Level,
    pub message: String,
    pub created: DateTime<Local>,
    pub process: u32,
    /// Thread name, or its id when unnamed.
    pub thread: String,
}

impl LogRecord {
    /// Captures time, process and thread at the call site.
    #[must_use]
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        let current = std::thread::current();
        let thread = current
            .name()
            .map_or_else(|| format!("{:?}", current.id()), ToString::to_string);
        Self {
            name: name.into(),
            level,
            message: message.into(),
            created: Local::now(),
            process: std::process::id(),
            thread,
        }
    }
}

/// `Send + Sync` because one handler is shared by every logger and thread that routes to it.
pub trait Handler: Send + Sync {
    /// Name the handler was declared under.
    fn name(&self) -> &str;

    /// Minimum level, `None` accepts everything.
    fn level(&self) -> Option<Level>;

    /// Writes one already-accepted record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn emit(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;

    /// Releases the sink; a later record may reopen it.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    fn close(&self) -> Result<(), crate::Error> {
        self.flush()
    }

    /// Threshold check applied before `emit`.
    fn accepts(&self, level: Level) -> bool {
        self.level().is_none_or(|min| level >= min)
    }

    /// Level-gated emit that never fails the caller: a broken sink must not take the
    /// program down with it.
    fn handle(&self, record: &LogRecord) {
        if !self.accepts(record.level) {
            return;
        }
        if let Err(e) = self.emit(record) {
            internal::report_emit_error(self.name(), record, &e);
        }
    }
}

/// Materializes a declared handler. `formatters` holds the already-built formatters by name.
///
/// # Errors
/// Unknown class or formatter, bad stream name, or a file that cannot be opened.
pub fn build(
    name: &str,
    config: &HandlerConfig,
    formatters: &BTreeMap<String, Formatter>,
) -> Result<Arc<dyn Handler>, crate::Error> {
    let Some(kind) = config.kind() else {
        return Err(crate::Error::UnknownHandlerClass {
            handler: name.to_string(),
            class: config.class.clone(),
        });
    };

    let formatter = match &config.formatter {
        Some(f) => formatters
            .get(f)
            .cloned()
            .ok_or_else(|| crate::Error::UnknownFormatter {
                handler: name.to_string(),
                formatter: f.clone(),
            })?,
        None => Formatter::default(),
    };

    internal::debug("HANDLER", &format!("Building handler '{name}' ({kind:?})"));

    let handler: Arc<dyn Handler> = match kind {
        HandlerKind::Stream => {
            let target = match &config.stream {
                Some(s) => StreamTarget::parse(s).ok_or_else(|| crate::Error::UnknownStream {
                    handler: name.to_string(),
                    stream: s.clone(),
                })?,
                None => StreamTarget::default(),
            };
            Arc::new(
                StreamHandler::new(name, target)
                    .level(config.level)
                    .formatter(formatter),
            )
        }
        HandlerKind::RotatingFile | HandlerKind::File => {
            let filename = config
                .filename
                .as_deref()
                .filter(|f| !f.is_empty())
                .ok_or_else(|| crate::Error::MissingFilename(name.to_string()))?;
            // A rotating file with a size cap always appends, whatever `mode` says.
            let sized = kind == HandlerKind::RotatingFile && config.max_bytes > 0;
            let mut file = RotatingFileHandler::new(name, expand_path(Path::new(filename)))
                .level(config.level)
                .formatter(formatter)
                .truncate(!sized && config.mode.as_deref() == Some("w"));
            if kind == HandlerKind::RotatingFile {
                file = file
                    .max_bytes(config.max_bytes)
                    .backup_count(config.backup_count);
            }
            if !config.delay {
                file.open()?;
            }
            Arc::new(file)
        }
        HandlerKind::Null => Arc::new(NullHandler::new(name)),
    };

    Ok(handler)
}
