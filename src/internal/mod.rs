//! Logroute's own diagnostics. They go through the shared manager under the `logroute`
//! logger, so they follow whatever configuration is active (the shipped document filters
//! them out below INFO).
//!
//! Failures inside handlers cannot be logged through handlers, so those go straight to stderr.

use crate::handler::LogRecord;
use crate::level::Level;
use crate::logger;
use std::io::{self, Write};

/// Logger name for diagnostics.
pub const LOGGER_NAME: &str = "logroute";

fn log(level: Level, scope: &str, msg: &str) {
    logger::global().log(LOGGER_NAME, level, &format!("[{scope}] {msg}"));
}

/// Startup and configuration details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Milestones worth keeping in the standard log.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// A handler failed to write a record. The caller keeps going.
pub fn report_emit_error(handler: &str, record: &LogRecord, err: &crate::Error) {
    let _ = writeln!(
        io::stderr().lock(),
        "--- Logging error ---\nhandler '{handler}' failed: {err}\nrecord: {} {} {}",
        record.name,
        record.level,
        record.message
    );
}

/// A handler failed outside of a write (flush, close).
pub fn report_error(handler: &str, err: &crate::Error) {
    let _ = writeln!(
        io::stderr().lock(),
        "--- Logging error ---\nhandler '{handler}' failed: {err}"
    );
}

/// Used when a record found no handler anywhere on its path: WARNING and above still
/// reach stderr as bare messages rather than vanishing.
pub fn last_resort(record: &LogRecord) {
    if record.level >= Level::Warning {
        let _ = writeln!(io::stderr().lock(), "{}", record.message);
    }
}
