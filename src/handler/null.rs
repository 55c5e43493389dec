//! Handler that swallows everything, for loggers that must stay silent.

use super::{Handler, LogRecord};
use crate::level::Level;

#[derive(Debug, Clone)]
pub struct NullHandler {
    name: String,
}

impl NullHandler {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Handler for NullHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Level> {
        None
    }

    fn emit(&self, _record: &LogRecord) -> Result<(), crate::Error> {
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
