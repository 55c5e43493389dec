//! Console output: one formatted line per record on stdout or stderr.

use super::{Handler, LogRecord};
use crate::config::StreamTarget;
use crate::fmt::Formatter;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

enum Sink {
    Stdout,
    Stderr,
    /// Injected writer, used to capture console output.
    Writer(Box<dyn Write + Send>),
}

/// Writes `formatted + "\n"` per record. The mutex keeps lines from concurrent threads whole.
pub struct StreamHandler {
    name: String,
    level: Option<Level>,
    formatter: Formatter,
    sink: Mutex<Sink>,
}

impl StreamHandler {
    #[must_use]
    pub fn new(name: impl Into<String>, target: StreamTarget) -> Self {
        let sink = match target {
            StreamTarget::Stdout => Sink::Stdout,
            StreamTarget::Stderr => Sink::Stderr,
        };
        Self {
            name: name.into(),
            level: None,
            formatter: Formatter::default(),
            sink: Mutex::new(sink),
        }
    }

    /// Sends lines to `writer` instead of a standard stream.
    #[must_use]
    pub fn with_writer(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            level: None,
            formatter: Formatter::default(),
            sink: Mutex::new(Sink::Writer(Box::new(writer))),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Option<Level>) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Handler for StreamHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Level> {
        self.level
    }

    fn emit(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut line = self.formatter.format(record);
        line.push('\n');

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Sink::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
            Sink::Writer(w) => w.write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *sink {
            Sink::Stdout => io::stdout().flush()?,
            Sink::Stderr => io::stderr().flush()?,
            Sink::Writer(w) => w.flush()?,
        }
        Ok(())
    }
}
