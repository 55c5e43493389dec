//! The process-wide manager. Uses `OnceLock` so it is created exactly once, even if
//! several entry points race to log before anything is configured.

use super::{Logger, Manager};
use crate::config::LoggingConfig;
use crate::internal;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Manager> = OnceLock::new();

/// The shared manager, created unconfigured on first use.
pub fn global() -> &'static Manager {
    GLOBAL.get_or_init(Manager::new)
}

/// Logger from the shared manager.
#[must_use]
pub fn get_logger(name: &str) -> Logger<'static> {
    global().logger(name)
}

/// Applies a document to the shared manager.
///
/// # Errors
/// Validation or handler construction failures; the previous configuration stays active.
pub fn dict_config(config: &LoggingConfig) -> Result<(), crate::Error> {
    global().configure(config)
}

/// Startup entry point: loads the document from `path` (or the default locations, or the
/// built-in document) and applies it to the shared manager.
///
/// A load failure is also logged through whatever root configuration is active, which
/// before the first successful setup means the last-resort stderr output.
///
/// # Errors
/// Missing explicit file, parse or validation errors, unopenable log files.
pub fn setup_logging(path: Option<&Path>) -> Result<LoggingConfig, crate::Error> {
    let config = match LoggingConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            let shown = path.map_or_else(
                || "<default>".to_string(),
                |p| p.display().to_string(),
            );
            get_logger(super::ROOT_NAME)
                .error(&format!("Error loading of logging config: {shown}: {e}"));
            return Err(e);
        }
    };

    dict_config(&config)?;
    internal::debug(
        "SETUP",
        &format!(
            "Logging configured: {} handlers, files: {}",
            config.handlers.len(),
            config
                .log_files()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    );
    Ok(config)
}

/// Flushes and closes every handler of the shared manager.
pub fn shutdown() {
    global().shutdown();
}
