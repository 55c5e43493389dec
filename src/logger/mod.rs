//! Named logging channels. A `Logger` is a cheap handle; the state it routes through
//! (levels, handlers, propagation) lives in the [`Manager`] that handed it out.

mod global;
mod manager;

pub use global::{dict_config, get_logger, global, setup_logging, shutdown};
pub use manager::{DEFAULT_ROOT_LEVEL, Manager, ROOT_NAME, is_root};

use crate::handler::Handler;
use crate::level::Level;
use std::sync::Arc;

/// Handle to one logger in a [`Manager`].
#[derive(Clone)]
pub struct Logger<'a> {
    manager: &'a Manager,
    name: String,
}

impl<'a> Logger<'a> {
    pub(crate) fn new(manager: &'a Manager, name: &str) -> Self {
        let name = if is_root(name) { ROOT_NAME } else { name };
        Self {
            manager,
            name: name.to_string(),
        }
    }

    /// Dotted name; `root` for the root logger.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gates on the effective level, then walks the hierarchy.
    pub fn log(&self, level: Level, msg: &str) {
        self.manager.log(&self.name, level, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    pub fn critical(&self, msg: &str) {
        self.log(Level::Critical, msg);
    }

    /// Lets callers skip building expensive messages that would be dropped anyway.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.manager.is_enabled_for(&self.name, level)
    }

    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.manager.add_handler(&self.name, handler);
    }

    #[must_use]
    pub fn effective_level(&self) -> Level {
        self.manager.effective_level(&self.name)
    }
}
