//! The logger registry: applies a `LoggingConfig` and routes records through the hierarchy.

use super::Logger;
use crate::config::{LoggerConfig, LoggingConfig};
use crate::fmt::Formatter;
use crate::handler::{self, Handler, LogRecord};
use crate::internal;
use crate::level::Level;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Name records carry when they come from the root logger.
pub const ROOT_NAME: &str = "root";

/// Root threshold before any configuration is applied.
pub const DEFAULT_ROOT_LEVEL: Level = Level::Warning;

/// `""` and `"root"` both address the root logger.
#[must_use]
pub fn is_root(name: &str) -> bool {
    name.is_empty() || name == ROOT_NAME
}

struct Node {
    level: Option<Level>,
    handlers: Vec<Arc<dyn Handler>>,
    propagate: bool,
    disabled: bool,
}

impl Node {
    fn new(level: Option<Level>) -> Self {
        Self {
            level,
            handlers: Vec::new(),
            propagate: true,
            disabled: false,
        }
    }
}

struct Registry {
    root: Node,
    loggers: HashMap<String, Node>,
}

impl Registry {
    /// The logger itself (when registered), its registered dotted ancestors, then root.
    fn lineage(&self, name: &str) -> Vec<&Node> {
        let mut nodes = Vec::new();
        if !is_root(name) {
            let mut current = Some(name);
            while let Some(n) = current {
                if let Some(node) = self.loggers.get(n) {
                    nodes.push(node);
                }
                current = n.rsplit_once('.').map(|(parent, _)| parent);
            }
        }
        nodes.push(&self.root);
        nodes
    }

    fn effective_level(&self, name: &str) -> Level {
        self.lineage(name)
            .iter()
            .find_map(|node| node.level)
            .unwrap_or(DEFAULT_ROOT_LEVEL)
    }

    fn is_disabled(&self, name: &str) -> bool {
        !is_root(name) && self.loggers.get(name).is_some_and(|n| n.disabled)
    }

    /// Every distinct handler currently attached anywhere.
    fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        let mut seen: Vec<Arc<dyn Handler>> = Vec::new();
        for node in self.loggers.values().chain(std::iter::once(&self.root)) {
            for h in &node.handlers {
                if !seen.iter().any(|s| Arc::ptr_eq(s, h)) {
                    seen.push(Arc::clone(h));
                }
            }
        }
        seen
    }
}

/// Owns the root logger and every named logger. One per process is normal (see
/// [`super::global`]); independent instances are useful in tests.
pub struct Manager {
    registry: RwLock<Registry>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Root at WARNING with no handlers: until configured, only the last-resort
    /// stderr output is active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry {
                root: Node::new(Some(DEFAULT_ROOT_LEVEL)),
                loggers: HashMap::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle to a named logger, registering the name on first use.
    pub fn logger(&self, name: &str) -> Logger<'_> {
        if !is_root(name) && !self.read().loggers.contains_key(name) {
            self.write()
                .loggers
                .entry(name.to_string())
                .or_insert_with(|| Node::new(None));
        }
        Logger::new(self, name)
    }

    /// Attaches a handler outside of any document; the next `configure` replaces it.
    pub fn add_handler(&self, name: &str, handler: Arc<dyn Handler>) {
        let mut registry = self.write();
        let node = if is_root(name) {
            &mut registry.root
        } else {
            registry
                .loggers
                .entry(name.to_string())
                .or_insert_with(|| Node::new(None))
        };
        node.handlers.push(handler);
    }

    /// Names of every registered (non-root) logger, sorted.
    #[must_use]
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().loggers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Threshold a record on `name` is gated on.
    #[must_use]
    pub fn effective_level(&self, name: &str) -> Level {
        self.read().effective_level(name)
    }

    /// Whether a record at `level` on `name` would be created at all.
    #[must_use]
    pub fn is_enabled_for(&self, name: &str, level: Level) -> bool {
        let registry = self.read();
        !registry.is_disabled(name) && level >= registry.effective_level(name)
    }

    /// Creates and dispatches a record. Does not register `name`.
    pub fn log(&self, name: &str, level: Level, message: &str) {
        let registry = self.read();
        if registry.is_disabled(name) || level < registry.effective_level(name) {
            return;
        }

        let record_name = if is_root(name) { ROOT_NAME } else { name };
        let record = LogRecord::new(record_name, level, message);

        let mut found = 0;
        for node in registry.lineage(name) {
            found += node.handlers.len();
            for h in &node.handlers {
                h.handle(&record);
            }
            if !node.propagate {
                break;
            }
        }

        if found == 0 {
            internal::last_resort(&record);
        }
    }

    /// Dry run of dispatch: handler names in the order a record would reach them.
    #[must_use]
    pub fn route(&self, name: &str, level: Level) -> Vec<String> {
        let registry = self.read();
        if registry.is_disabled(name) || level < registry.effective_level(name) {
            return Vec::new();
        }

        let mut names = Vec::new();
        for node in registry.lineage(name) {
            names.extend(
                node.handlers
                    .iter()
                    .filter(|h| h.accepts(level))
                    .map(|h| h.name().to_string()),
            );
            if !node.propagate {
                break;
            }
        }
        names
    }

    /// Applies a document. Everything is validated and built before the registry is touched,
    /// so a failing document leaves the previous configuration in place.
    ///
    /// # Errors
    /// Validation failures and handler construction errors (e.g. unopenable files).
    pub fn configure(&self, config: &LoggingConfig) -> Result<(), crate::Error> {
        config.validate()?;

        let formatters: BTreeMap<String, Formatter> = config
            .formatters
            .iter()
            .map(|(name, f)| (name.clone(), Formatter::from_config(f)))
            .collect();

        let mut handlers: BTreeMap<&str, Arc<dyn Handler>> = BTreeMap::new();
        for (name, h) in &config.handlers {
            handlers.insert(name, handler::build(name, h, &formatters)?);
        }

        let attach = |names: &[String]| -> Vec<Arc<dyn Handler>> {
            names
                .iter()
                .filter_map(|n| handlers.get(n.as_str()).cloned())
                .collect()
        };

        let previous = {
            let mut registry = self.write();
            let previous = registry.handlers();

            let configured: Vec<&str> = config.loggers.keys().map(String::as_str).collect();
            for (name, node) in &mut registry.loggers {
                if configured.contains(&name.as_str()) {
                    continue;
                }
                node.handlers.clear();
                if configured
                    .iter()
                    .any(|c| name.strip_prefix(c).is_some_and(|rest| rest.starts_with('.')))
                {
                    node.level = None;
                    node.propagate = true;
                } else {
                    node.disabled = config.disable_existing_loggers;
                }
            }

            for (name, logger) in &config.loggers {
                if is_root(name) {
                    apply(&mut registry.root, logger, attach(&logger.handlers));
                    registry.root.propagate = true;
                    continue;
                }
                let node = registry
                    .loggers
                    .entry(name.clone())
                    .or_insert_with(|| Node::new(None));
                apply(node, logger, attach(&logger.handlers));
                node.disabled = false;
            }

            // The `root` section wins over a `loggers` entry that names the root logger.
            if let Some(root) = &config.root {
                apply(&mut registry.root, root, attach(&root.handlers));
                registry.root.propagate = true;
            }

            previous
        };

        for h in previous {
            if let Err(e) = h.close() {
                internal::report_error(h.name(), &e);
            }
        }

        internal::debug(
            "CONFIG",
            &format!(
                "Configured {} handlers, {} loggers",
                config.handlers.len(),
                config.loggers.len()
            ),
        );
        Ok(())
    }

    /// # Errors
    /// The first flush failure; remaining handlers are still flushed.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let mut first = Ok(());
        for h in self.read().handlers() {
            if let Err(e) = h.flush()
                && first.is_ok()
            {
                first = Err(e);
            }
        }
        first
    }

    /// Flushes and closes every handler. Loggers stay registered; file handlers reopen
    /// if another record arrives.
    pub fn shutdown(&self) {
        for h in self.read().handlers() {
            if let Err(e) = h.close() {
                internal::report_error(h.name(), &e);
            }
        }
    }
}

fn apply(node: &mut Node, config: &LoggerConfig, handlers: Vec<Arc<dyn Handler>>) {
    if config.level.is_some() {
        node.level = config.level;
    }
    node.handlers = handlers;
    node.propagate = config.propagate;
}
